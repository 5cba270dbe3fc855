use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrarError {
    MalformedName(String),
    DuplicateRegistration(String),
    NotRegistered(String),
    Config(String),
    Logging(String),
}

impl RegistrarError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            RegistrarError::MalformedName(_) => "E001",
            RegistrarError::DuplicateRegistration(_) => "E002",
            RegistrarError::NotRegistered(_) => "E003",
            RegistrarError::Config(_) => "E004",
            RegistrarError::Logging(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            RegistrarError::MalformedName(_) => "Malformed Object Name",
            RegistrarError::DuplicateRegistration(_) => "Duplicate Registration",
            RegistrarError::NotRegistered(_) => "Object Not Registered",
            RegistrarError::Config(_) => "Configuration Error",
            RegistrarError::Logging(_) => "Logging Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            RegistrarError::MalformedName(msg) => msg,
            RegistrarError::DuplicateRegistration(msg) => msg,
            RegistrarError::NotRegistered(msg) => msg,
            RegistrarError::Config(msg) => msg,
            RegistrarError::Logging(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RegistrarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RegistrarError {}

// 便捷的构造函数
impl RegistrarError {
    pub fn malformed_name<T: Into<String>>(msg: T) -> Self {
        RegistrarError::MalformedName(msg.into())
    }

    pub fn duplicate_registration<T: Into<String>>(msg: T) -> Self {
        RegistrarError::DuplicateRegistration(msg.into())
    }

    pub fn not_registered<T: Into<String>>(msg: T) -> Self {
        RegistrarError::NotRegistered(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        RegistrarError::Config(msg.into())
    }

    pub fn logging<T: Into<String>>(msg: T) -> Self {
        RegistrarError::Logging(msg.into())
    }
}

impl From<config::ConfigError> for RegistrarError {
    fn from(err: config::ConfigError) -> Self {
        RegistrarError::Config(err.to_string())
    }
}

impl From<std::io::Error> for RegistrarError {
    fn from(err: std::io::Error) -> Self {
        RegistrarError::Logging(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
