use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "checkmate-cli")]
#[command(about = "Command line client for the Checkmate UI API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Part {
    SubDomain,
    Path,
    Query,
}

impl Part {
    fn wire_name(self) -> &'static str {
        match self {
            Part::SubDomain => "subDomain",
            Part::Path => "path",
            Part::Query => "query",
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check server status
    Status,
    /// Analyze a URL and open a session for it
    Analyze {
        target: String,
    },
    /// Show a session
    Show {
        session: String,
    },
    /// Analyze a new URL within an existing session
    Reanalyze {
        session: String,
        target: String,
    },
    /// Switch one part of the URL on or off
    Toggle {
        session: String,
        #[arg(value_enum)]
        part: Part,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
        /// Sub-domain index, outermost label first
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
    /// Close a session
    Close {
        session: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let sessions = format!("{}/ui/api/sessions", cli.url);

    let res = match cli.command {
        Commands::Status => client.get(format!("{}/health", cli.url)).send().await?,
        Commands::Analyze { target } => {
            client.post(&sessions).json(&json!({ "url": target })).send().await?
        }
        Commands::Show { session } => {
            client.get(format!("{}/{}", sessions, session)).send().await?
        }
        Commands::Reanalyze { session, target } => {
            client
                .post(format!("{}/{}/analyze", sessions, session))
                .json(&json!({ "url": target }))
                .send()
                .await?
        }
        Commands::Toggle { session, part, enabled, index } => {
            client
                .post(format!("{}/{}/toggle", sessions, session))
                .json(&json!({ "part": part.wire_name(), "enabled": enabled, "index": index }))
                .send()
                .await?
        }
        Commands::Close { session } => {
            client.delete(format!("{}/{}", sessions, session)).send().await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return check_status(status);
    }
    check_status(status)?;

    let text = res.text().await?;
    if text.is_empty() {
        println!("{}", status);
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    if let Some(candidate) = json
        .get("candidateUrl")
        .or_else(|| json.pointer("/view/candidateUrl"))
        .and_then(Value::as_str)
    {
        println!("Candidate URL: {}", candidate);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

/// Non-2xx answers become errors so the process exits non-zero.
fn check_status(status: reqwest::StatusCode) -> Result<(), Box<dyn std::error::Error>> {
    if status.is_success() {
        Ok(())
    } else {
        Err(format!("API returned status {}", status).into())
    }
}
