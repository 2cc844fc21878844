//! User-facing message texts, shared by the API and the client.

pub const USERNAME_TOO_SHORT: &str = "Username kamida 3 ta belgi.";
pub const EMAIL_INVALID: &str = "Email noto‘g‘ri.";
pub const PASSWORD_TOO_SHORT: &str = "Parol kamida 4 ta belgi.";
pub const EMAIL_TAKEN: &str = "Bu email allaqachon ro‘yxatdan o‘tgan.";
pub const REGISTER_SUCCESS: &str = "Register muvaffaqiyatli.";

pub const CREDENTIALS_REQUIRED: &str = "Email va parol kerak.";
pub const EMAIL_NOT_FOUND: &str = "Email topilmadi.";
pub const ACCOUNT_INACTIVE: &str = "Account aktiv emas.";
pub const WRONG_PASSWORD: &str = "Parol noto‘g‘ri.";
pub const LOGIN_SUCCESS: &str = "Login muvaffaqiyatli.";

pub const MALFORMED_REQUEST: &str = "So‘rov formati noto‘g‘ri.";
pub const SERVER_ERROR: &str = "Server xatosi.";

// Client notices
pub const FILL_ALL_FIELDS: &str = "Barcha maydonlarni to‘ldiring";
pub const ENTER_EMAIL_AND_PASSWORD: &str = "Email va parolni kiriting";
pub const REGISTER_DONE_NOTICE: &str = "Register muvaffaqiyatli!";
pub const GENERIC_FAILURE: &str = "Xatolik yuz berdi";
pub const LOGIN_FAILURE: &str = "Login xato";
pub const SERVER_UNREACHABLE: &str = "Server bilan bog‘lanib bo‘lmadi";
pub const FEATURE_LOCKED: &str = "🔒 This feature is locked. Upgrade your plan.";
pub const RESET_LINK_SENT: &str = "📧 Reset link sent!";
