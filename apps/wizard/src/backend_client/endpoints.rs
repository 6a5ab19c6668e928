// Paths on the résumé backend, relative to `BACKEND_URL`.

pub const PARSE_LINKEDIN: &str = "/api/parse-linkedin";
pub const GENERATE_PDF: &str = "/api/generate-pdf";
pub const SEND_EMAIL: &str = "/api/send-email";
pub const LINKEDIN_AUTH: &str = "/api/linkedin/auth";
pub const LINKEDIN_PROFILE: &str = "/api/linkedin/profile";
pub const LINKEDIN_LOGOUT: &str = "/api/linkedin/logout";
