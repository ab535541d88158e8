use clap::{Parser, Subcommand};
use serde_json::Value;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use locale_gateway::content::{filter_by_locale, normalize_collection};
use locale_gateway::locale::{resolve_locale, LocaleSettings, RequestContext, SupportedLocale};
use locale_gateway::routing::LocaleRouter;

#[derive(Parser)]
#[command(name = "locale-route")]
#[command(about = "Evaluate locale routing decisions offline", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the routing decision for a request
    Route {
        #[arg(short, long)]
        path: String,
        /// Value of the preferredLanguage cookie
        #[arg(short, long)]
        cookie: Option<String>,
        #[arg(short, long)]
        accept_language: Option<String>,
    },
    /// Show the locale a request resolves to
    Resolve {
        #[arg(short, long)]
        cookie: Option<String>,
        #[arg(short, long)]
        accept_language: Option<String>,
    },
    /// Filter a CMS JSON response down to one locale
    Filter {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        locale: SupportedLocale,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let output = execute(cli.command, Arc::new(LocaleSettings::default()))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run one subcommand and build its JSON report.
fn execute(command: Commands, settings: Arc<LocaleSettings>) -> Result<Value, Box<dyn Error>> {
    let output = match command {
        Commands::Route {
            path,
            cookie,
            accept_language,
        } => {
            let router = LocaleRouter::new(settings);
            if router.is_excluded(&path) {
                serde_json::json!({ "path": path, "excluded": true })
            } else {
                let ctx = RequestContext {
                    path: path.clone(),
                    cookie_preferred_language: cookie,
                    accept_language,
                };
                let (locale, decision) = router.decide(&ctx);
                serde_json::json!({ "path": path, "locale": locale, "decision": decision })
            }
        }
        Commands::Resolve {
            cookie,
            accept_language,
        } => {
            let locale = resolve_locale(&settings, cookie.as_deref(), accept_language.as_deref());
            serde_json::json!({ "locale": locale })
        }
        Commands::Filter { file, locale } => {
            let raw = std::fs::read_to_string(&file)?;
            filter_response(&settings, &raw, locale)?
        }
    };
    Ok(output)
}

/// Normalize a raw CMS response and keep the items for `locale`.
fn filter_response(settings: &LocaleSettings, raw: &str, locale: SupportedLocale) -> Result<Value, Box<dyn Error>> {
    let value: Value = serde_json::from_str(raw)?;
    let items = normalize_collection(&value)?;
    Ok(serde_json::to_value(filter_by_locale(settings, items, locale))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Arc<LocaleSettings> {
        Arc::new(LocaleSettings::default())
    }

    fn route(path: &str, cookie: Option<&str>, accept_language: Option<&str>) -> Value {
        let command = Commands::Route {
            path: path.to_string(),
            cookie: cookie.map(str::to_string),
            accept_language: accept_language.map(str::to_string),
        };
        execute(command, settings()).unwrap()
    }

    #[test]
    fn test_route_reports_redirect() {
        let out = route("/news", None, Some("pt-BR,en;q=0.9"));
        assert_eq!(out["locale"], "br");
        assert_eq!(out["decision"]["action"], "redirect");
        assert_eq!(out["decision"]["target"], "/br/news");
        assert_eq!(out["decision"]["status"], "temporary");
    }

    #[test]
    fn test_route_reports_rewrite_and_pass_through() {
        let out = route("/news", None, None);
        assert_eq!(out["decision"]["action"], "rewrite");
        assert_eq!(out["decision"]["target"], "/en/news");

        let out = route("/post/hello-es/", None, Some("en"));
        assert_eq!(out["decision"]["action"], "pass_through");
    }

    #[test]
    fn test_route_reports_excluded_path() {
        let out = route("/api/posts", Some("es"), None);
        assert_eq!(out, serde_json::json!({ "path": "/api/posts", "excluded": true }));
    }

    #[test]
    fn test_resolve() {
        let command = Commands::Resolve {
            cookie: Some("es".to_string()),
            accept_language: Some("pt-BR".to_string()),
        };
        assert_eq!(execute(command, settings()).unwrap(), serde_json::json!({ "locale": "es" }));
    }

    #[test]
    fn test_filter_response() {
        let raw = r#"{ "data": [
            { "id": 1, "attributes": { "title": "a", "locale": "pt-BR" } },
            { "id": 2, "attributes": { "title": "b" } },
            { "id": 3, "attributes": { "title": "c", "locale": "es" } }
        ] }"#;
        let out = filter_response(&settings(), raw, SupportedLocale::Br).unwrap();
        let items = out.as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["id"], "1");
    }

    #[test]
    fn test_filter_rejects_bad_input() {
        assert!(filter_response(&settings(), "not json", SupportedLocale::En).is_err());
        assert!(filter_response(&settings(), r#"{ "posts": [] }"#, SupportedLocale::En).is_err());
    }

    #[test]
    fn test_filter_reads_file() {
        let path = std::env::temp_dir().join(format!("locale-route-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{ "_id": "x", "title": "t" }, { "_id": "y", "title": "u", "language": "es" }]"#).unwrap();

        let command = Commands::Filter {
            file: path.clone(),
            locale: SupportedLocale::En,
        };
        let out = execute(command, settings()).unwrap();
        assert_eq!(out.as_array().unwrap().len(), 1);
        assert_eq!(out[0]["id"], "x");

        std::fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_error() {
        let command = Commands::Filter {
            file: PathBuf::from("/nonexistent/cms.json"),
            locale: SupportedLocale::En,
        };
        assert!(execute(command, settings()).is_err());
    }
}
