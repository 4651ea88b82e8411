use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::client::{ClientConfig, DEFAULT_URL};

#[derive(Debug, Default, PartialEq)]
struct RcConfig {
    url: Option<String>,
    verify: Option<bool>,
}

pub(crate) fn load_config(url: Option<String>, verify: Option<bool>) -> Result<ClientConfig> {
    let mut url = url.or_else(|| std::env::var("PUBMED_EUTILS_URL").ok());
    let mut file_verify: Option<bool> = None;

    if url.is_none() || verify.is_none() {
        for rc_path in rc_candidates() {
            if rc_path.exists() {
                let cfg = read_rc(&rc_path).with_context(|| {
                    format!("failed to read configuration file {}", rc_path.display())
                })?;
                tracing::debug!(path = %rc_path.display(), "loaded configuration file");

                if url.is_none() {
                    url = cfg.url;
                }
                file_verify = cfg.verify;
                break;
            }
        }
    }

    Ok(ClientConfig {
        url: url.unwrap_or_else(|| DEFAULT_URL.to_string()),
        verify: verify.or(file_verify).unwrap_or(true),
    })
}

fn read_rc(path: &Path) -> Result<RcConfig> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_rc(&text))
}

fn parse_rc(text: &str) -> RcConfig {
    let mut cfg = RcConfig::default();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Split on the first colon only; URLs carry their own.
        if let Some((k, v)) = line.split_once(':') {
            let v = strip_quotes(v.trim());
            if v.is_empty() {
                continue;
            }
            match k.trim() {
                "url" => cfg.url = Some(v.to_string()),
                "verify" => cfg.verify = Some(v != "0"),
                _ => {}
            }
        }
    }

    cfg
}

fn strip_quotes(s: &str) -> &str {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"') && s.len() >= 2)
        || (s.starts_with('\'') && s.ends_with('\'') && s.len() >= 2)
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn rc_candidates() -> Vec<PathBuf> {
    // 1) PUBMED_RC (explicit)
    // 2) ./.pubmedrc
    // 3) ~/.pubmedrc
    if let Ok(p) = std::env::var("PUBMED_RC") {
        return vec![PathBuf::from(p)];
    }

    let mut v = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        v.push(cwd.join(".pubmedrc"));
    }
    if let Some(home) = dirs::home_dir() {
        v.push(home.join(".pubmedrc"));
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_url_and_verify() {
        let cfg = parse_rc(
            "# local mirror\nurl: https://mirror.example.org/entrez/eutils\nverify: 0\nunknown: x\n",
        );
        assert_eq!(
            cfg.url.as_deref(),
            Some("https://mirror.example.org/entrez/eutils")
        );
        assert_eq!(cfg.verify, Some(false));
    }

    #[test]
    fn strips_quotes_and_skips_blank_values() {
        let cfg = parse_rc("url: \"http://localhost:8080\"\nverify:\n");
        assert_eq!(cfg.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cfg.verify, None);

        let cfg = parse_rc("verify: '1'");
        assert_eq!(cfg.verify, Some(true));
    }

    #[test]
    fn reads_rc_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "url: http://127.0.0.1:9999").unwrap();
        let cfg = read_rc(file.path()).unwrap();
        assert_eq!(cfg.url.as_deref(), Some("http://127.0.0.1:9999"));
    }

    #[test]
    fn explicit_arguments_win() {
        let cfg = load_config(Some("http://explicit".into()), Some(false)).unwrap();
        assert_eq!(cfg.url, "http://explicit");
        assert!(!cfg.verify);
    }
}
