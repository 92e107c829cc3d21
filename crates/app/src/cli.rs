//! Command line definitions and dispatch

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use docbase_application::{ExecutionContext, KnowledgeBaseClient, Outcome};
use docbase_domain::{
    Application, ChatAttributes, Credentials, Question, ensure_email, ensure_name,
};
use docbase_infrastructure::{CallbackRedirect, ReqwestTransport, load_service_config};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

/// Exit code used when the service rejected the API key.
const EXIT_SESSION_EXPIRED: u8 = 2;

type CliResult = Result<ExitCode, Box<dyn Error>>;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "docbase")]
#[command(about = "Manage and query Docbase knowledge-base collections", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Account identifier, embedded in the service host name
    #[arg(
        long,
        global = true,
        env = "DOCBASE_ACCOUNT",
        default_value = "",
        hide_default_value = true
    )]
    account: String,
    /// API key sent with every request
    #[arg(
        long,
        global = true,
        env = "DOCBASE_API_KEY",
        default_value = "",
        hide_default_value = true,
        hide_env_values = true
    )]
    api_key: String,
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Manage collections
    Collections {
        #[command(subcommand)]
        command: CollectionCommands,
    },
    /// Manage the documents of a collection
    Docs {
        #[command(subcommand)]
        command: DocCommands,
    },
    /// Ask a question against a collection
    Ask {
        /// Collection to query
        collection: String,
        /// Natural language question
        question: String,
        /// Continue the conversation of an earlier answer
        #[arg(long, value_name = "ID")]
        conversation_id: Option<String>,
        /// Number of passages the answer may draw on
        #[arg(long)]
        top_k: Option<u32>,
        /// Only answer from this document
        #[arg(long, value_name = "NAME")]
        doc: Option<String>,
    },
    /// Chat with a collection, one question per line of standard input
    Chat {
        /// Collection to query
        collection: String,
        /// Only answer from this document
        #[arg(long, value_name = "NAME")]
        doc: Option<String>,
        /// Number of passages each answer may draw on
        #[arg(long)]
        top_k: Option<u32>,
    },
    /// Manage API keys
    ApiKeys {
        #[command(subcommand)]
        command: ApiKeyCommands,
    },
    /// Manage chat applications
    Apps {
        #[command(subcommand)]
        command: AppCommands,
    },
    /// Check a name or an email address without contacting the service
    Validate {
        #[command(subcommand)]
        command: ValidateCommands,
    },
}

/// Collection subcommands
#[derive(Subcommand)]
enum CollectionCommands {
    /// List the collections of the account
    List,
    /// Create a private collection
    Create { name: String },
    /// Delete a collection and its documents
    Delete { name: String },
    /// Show a collection with its chat attributes
    Describe { name: String },
    /// Make a collection publicly readable
    Share { name: String },
    /// Make a collection private again
    Unshare { name: String },
    /// Set the persona and negative response used when answering
    ConfigureChat {
        name: String,
        /// Persona given to the model (service default when omitted)
        #[arg(long)]
        persona: Option<String>,
        /// Answer given when the documents hold no answer
        #[arg(long)]
        negative_response: Option<String>,
    },
}

/// Document subcommands
#[derive(Subcommand)]
enum DocCommands {
    /// List the documents of a collection
    List { collection: String },
    /// Delete a document
    Delete { collection: String, doc: String },
    /// Upload a file into a collection
    Upload {
        collection: String,
        /// File to upload; its name becomes the document name
        path: PathBuf,
    },
    /// Summarize a document
    Summary { collection: String, doc: String },
    /// Start crawling a website into a collection
    Crawl {
        collection: String,
        root_url: String,
        /// Maximum number of pages to fetch
        #[arg(long, default_value_t = 100)]
        max_pages: u32,
    },
    /// Show the progress of a crawl
    CrawlStatus { collection: String, crawl_id: String },
    /// Index the pages of a finished crawl
    IndexCrawl { collection: String, crawl_id: String },
}

/// API key subcommands
#[derive(Subcommand)]
enum ApiKeyCommands {
    /// List API keys with masked values
    List,
    /// Create an API key; the only time its value is shown
    Create { name: String },
    /// Delete an API key
    Delete { name: String },
}

/// Application subcommands
#[derive(Subcommand)]
enum AppCommands {
    /// List applications
    List,
    /// Create an application answering from a collection
    CreateCollection { name: String, collection: String },
    /// Create an application chatting directly with a model
    CreateGpt {
        name: String,
        #[arg(long, default_value = "openai")]
        provider: String,
        #[arg(long, short = 'm')]
        model: String,
    },
    /// Delete an application
    Delete { name: String },
    /// Ask a question through an application
    Ask { name: String, question: String },
}

/// Validation subcommands
#[derive(Subcommand)]
enum ValidateCommands {
    /// Check a collection, key or application name
    Name { value: String },
    /// Check an email address
    Email { value: String },
}

/// Runs a parsed command line.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the request
/// fails, or a local file cannot be read.
pub async fn run(cli: Cli) -> CliResult {
    if let Commands::Validate { command } = &cli.command {
        return Ok(validate(command));
    }

    let config = load_service_config()?;
    let transport = Arc::new(ReqwestTransport::new()?);
    let redirect = CallbackRedirect::new(|location| {
        eprintln!("Session expired, sign in again at {location}");
    });
    let client = KnowledgeBaseClient::new(transport, config)
        .with_context(ExecutionContext::server(Arc::new(redirect)));
    let credentials = Credentials::new(cli.account, cli.api_key);

    debug!(account = %credentials.account_id, "running command");

    match cli.command {
        Commands::Collections { command } => collections(&client, &credentials, command).await,
        Commands::Docs { command } => docs(&client, &credentials, command).await,
        Commands::Ask {
            collection,
            question,
            conversation_id,
            top_k,
            doc,
        } => {
            let mut question = Question::new(question);
            question.top_k = top_k;
            question.doc_name = doc;
            question.conversation_id = conversation_id;
            print(client.ask_question(&credentials, &collection, &question).await?)
        }
        Commands::Chat {
            collection,
            doc,
            top_k,
        } => chat(&client, credentials, collection, doc, top_k).await,
        Commands::ApiKeys { command } => api_keys(&client, &credentials, command).await,
        Commands::Apps { command } => apps(&client, &credentials, command).await,
        Commands::Validate { .. } => Ok(ExitCode::SUCCESS),
    }
}

async fn collections(
    client: &KnowledgeBaseClient<ReqwestTransport>,
    credentials: &Credentials,
    command: CollectionCommands,
) -> CliResult {
    match command {
        CollectionCommands::List => print(client.list_collections(credentials).await?),
        CollectionCommands::Create { name } => {
            print(client.create_collection(credentials, &name).await?)
        }
        CollectionCommands::Delete { name } => {
            print(client.delete_collection(credentials, &name).await?)
        }
        CollectionCommands::Describe { name } => {
            print(client.describe_collection(credentials, &name).await?)
        }
        CollectionCommands::Share { name } => {
            print(client.share_collection(credentials, &name, true).await?)
        }
        CollectionCommands::Unshare { name } => {
            print(client.share_collection(credentials, &name, false).await?)
        }
        CollectionCommands::ConfigureChat {
            name,
            persona,
            negative_response,
        } => {
            let attributes = ChatAttributes {
                persona,
                negative_response,
            };
            print(client.configure_chat(credentials, &name, &attributes).await?)
        }
    }
}

async fn docs(
    client: &KnowledgeBaseClient<ReqwestTransport>,
    credentials: &Credentials,
    command: DocCommands,
) -> CliResult {
    match command {
        DocCommands::List { collection } => {
            print(client.list_documents(credentials, &collection).await?)
        }
        DocCommands::Delete { collection, doc } => {
            print(client.delete_document(credentials, &collection, &doc).await?)
        }
        DocCommands::Upload { collection, path } => {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| format!("not a file path: {}", path.display()))?
                .to_string();
            let content = tokio::fs::read(&path).await?;
            print(
                client
                    .upload_document(credentials, &collection, &file_name, content)
                    .await?,
            )
        }
        DocCommands::Summary { collection, doc } => {
            print(client.summarize_document(credentials, &collection, &doc).await?)
        }
        DocCommands::Crawl {
            collection,
            root_url,
            max_pages,
        } => print(
            client
                .create_crawl(credentials, &collection, &root_url, max_pages)
                .await?,
        ),
        DocCommands::CrawlStatus {
            collection,
            crawl_id,
        } => print(client.get_crawl(credentials, &collection, &crawl_id).await?),
        DocCommands::IndexCrawl {
            collection,
            crawl_id,
        } => print(client.index_crawl(credentials, &collection, &crawl_id).await?),
    }
}

async fn api_keys(
    client: &KnowledgeBaseClient<ReqwestTransport>,
    credentials: &Credentials,
    command: ApiKeyCommands,
) -> CliResult {
    match command {
        ApiKeyCommands::List => print(client.list_api_keys(credentials).await?),
        ApiKeyCommands::Create { name } => print(client.create_api_key(credentials, &name).await?),
        ApiKeyCommands::Delete { name } => print(client.delete_api_key(credentials, &name).await?),
    }
}

async fn apps(
    client: &KnowledgeBaseClient<ReqwestTransport>,
    credentials: &Credentials,
    command: AppCommands,
) -> CliResult {
    match command {
        AppCommands::List => print(client.list_application_records(credentials).await?),
        AppCommands::CreateCollection { name, collection } => {
            let application = Application::collection(name, collection);
            print(client.create_application(credentials, &application).await?)
        }
        AppCommands::CreateGpt {
            name,
            provider,
            model,
        } => {
            let application = Application::gpt(name, provider, model);
            print(client.create_application(credentials, &application).await?)
        }
        AppCommands::Delete { name } => {
            print(client.delete_application(credentials, &name).await?)
        }
        AppCommands::Ask { name, question } => print(
            client
                .ask_application(credentials, &name, &Question::new(question))
                .await?,
        ),
    }
}

async fn chat(
    client: &KnowledgeBaseClient<ReqwestTransport>,
    credentials: Credentials,
    collection: String,
    doc: Option<String>,
    top_k: Option<u32>,
) -> CliResult {
    let mut session = client.chat(credentials, collection, doc);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        match session.ask(question, top_k).await? {
            Outcome::Completed(answer) => println!("{}\n", answer.answer),
            Outcome::SessionExpired => return Ok(ExitCode::from(EXIT_SESSION_EXPIRED)),
        }
    }
    debug!(turns = session.history().len(), "chat finished");
    Ok(ExitCode::SUCCESS)
}

fn validate(command: &ValidateCommands) -> ExitCode {
    let result = match command {
        ValidateCommands::Name { value } => ensure_name(value),
        ValidateCommands::Email { value } => ensure_email(value),
    };
    match result {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints completed data as pretty JSON.
fn print<T: Serialize>(outcome: Outcome<T>) -> CliResult {
    match outcome {
        Outcome::Completed(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::SessionExpired => Ok(ExitCode::from(EXIT_SESSION_EXPIRED)),
    }
}
