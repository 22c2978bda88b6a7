use log::Level;

pub const WHATSAPP_NUMBER: &str = "919876109062";
pub const PHONE: &str = "+919876109062";
pub const PHONE_DISPLAY: &str = "+91 9876109062";
pub const EMAIL: &str = "birgienterprises@gmail.com";
pub const DEVELOPER_URL: &str = "https://codesangam.tech/";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
