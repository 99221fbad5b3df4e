pub const CHECKSFILE_DEFAULT: &str = "checks.json";
pub const HTMLFILE_DEFAULT: &str = "index.html";
pub const DOWNLOAD_DEFAULT: &str = "tmp.html";
