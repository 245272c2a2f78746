const ENV_HOST: &str = "OPTIC_HOST";
const ENV_PORT: &str = "OPTIC_PORT";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8687;

pub(crate) fn resolve_listen_addr() -> String {
    listen_addr(std::env::var(ENV_HOST).ok(), std::env::var(ENV_PORT).ok())
}

fn listen_addr(host: Option<String>, port: Option<String>) -> String {
    let host = host
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = port
        .and_then(|value| value.trim().parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    format!("{host}:{port}")
}

#[cfg(test)]
mod tests {
    use super::listen_addr;

    #[test]
    fn defaults_apply_when_unset_or_unparsable() {
        assert_eq!(listen_addr(None, None), "127.0.0.1:8687");
        assert_eq!(
            listen_addr(Some(" ".to_string()), Some("not-a-port".to_string())),
            "127.0.0.1:8687"
        );
    }

    #[test]
    fn explicit_values_win() {
        assert_eq!(
            listen_addr(Some("0.0.0.0".to_string()), Some("9000".to_string())),
            "0.0.0.0:9000"
        );
    }
}
