use std::fmt;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    /// The backend rejected the access token (401). Callers treat this as
    /// an expired session rather than a display-worthy HTTP failure.
    Unauthorized,
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Erro de configuração: {message}"),
            AppError::Network(message) => write!(formatter, "Erro de rede: {message}"),
            AppError::Timeout(message) => write!(formatter, "Tempo esgotado: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Falha na requisição ({status}): {message}")
            }
            AppError::Unauthorized => write!(formatter, "Sessão expirada. Entre novamente."),
            AppError::Parse(message) => write!(formatter, "Erro na resposta: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Erro na requisição: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn http_error_display_includes_status() {
        let err = AppError::Http {
            status: 503,
            message: "indisponível".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("indisponível"));
    }
}
