//! Interactive menu client for the todo gRPC service.
//!
//! Each RPC is awaited and its outcome printed before the next menu is
//! shown, so output never interleaves with the following prompt.

use std::fmt;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tonic::transport::Channel;

use crate::grpc::TodoServiceClient;
use crate::schema::{Empty, TodoId, TodoItem};

const MENU: &str = "\nTodo gRPC Client Menu:\n\
1. Create Todo\n\
2. List Todos\n\
3. Get Todo by ID\n\
4. Update Todo\n\
5. Delete Todo\n\
6. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Get,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Get),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Only a case-insensitive `true` counts as completed.
pub fn parse_completed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("true")
}

#[derive(Debug)]
pub enum ClientError {
    Connect(tonic::transport::Error),
    Io(std::io::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connect(e) => write!(f, "failed to connect: {}", e),
            ClientError::Io(e) => write!(f, "terminal io error: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Connect(e) => Some(e),
            ClientError::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err)
    }
}

impl From<tonic::transport::Error> for ClientError {
    fn from(err: tonic::transport::Error) -> Self {
        ClientError::Connect(err)
    }
}

/// Line-oriented prompt over any async reader/writer pair.
struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin> Prompt<R, W> {
    /// Print `question` and read one line. `None` once input is exhausted.
    async fn ask(&mut self, question: &str) -> std::io::Result<Option<String>> {
        self.say(question).await?;
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }

    async fn say_line(&mut self, text: &str) -> std::io::Result<()> {
        self.say(&format!("{}\n", text)).await
    }

    async fn ask_item(&mut self, id_prompt: &str, new: bool) -> std::io::Result<Option<TodoItem>> {
        let label = if new { "" } else { "new " };
        let Some(id) = self.ask(id_prompt).await? else {
            return Ok(None);
        };
        let Some(title) = self.ask(&format!("Enter {}Title: ", label)).await? else {
            return Ok(None);
        };
        let Some(description) = self.ask(&format!("Enter {}Description: ", label)).await? else {
            return Ok(None);
        };
        let Some(completed) = self.ask("Is Completed? (true/false): ").await? else {
            return Ok(None);
        };
        Ok(Some(TodoItem::new(id, title, description, parse_completed(&completed))))
    }
}

/// Connect to `endpoint` and run the menu on stdin/stdout.
pub async fn run(endpoint: String) -> Result<(), ClientError> {
    let mut client = TodoServiceClient::connect(endpoint).await?;
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_with(&mut client, stdin, tokio::io::stdout()).await
}

/// Run the menu loop until Exit or end of input.
pub async fn run_with<R, W>(
    client: &mut TodoServiceClient<Channel>,
    input: R,
    output: W,
) -> Result<(), ClientError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut prompt = Prompt { input, output };

    loop {
        prompt.say(MENU).await?;
        let Some(choice) = prompt.ask("Choose an option (1-6): ").await? else {
            return Ok(());
        };

        let line = match MenuChoice::parse(&choice) {
            Some(MenuChoice::Create) => {
                let Some(item) = prompt.ask_item("Enter ID: ", true).await? else {
                    return Ok(());
                };
                match client.create_todo(item).await {
                    Ok(resp) => format!("Todo created: {:?}", resp.into_inner()),
                    Err(status) => format!("Error creating todo: {}", status.message()),
                }
            }
            Some(MenuChoice::List) => match client.list_todos(Empty {}).await {
                Ok(resp) => format!("Todos: {:?}", resp.into_inner().todos),
                Err(status) => format!("Error listing todos: {}", status.message()),
            },
            Some(MenuChoice::Get) => {
                let Some(id) = prompt.ask("Enter ID: ").await? else {
                    return Ok(());
                };
                match client.get_todo(TodoId::new(id)).await {
                    Ok(resp) => format!("Fetched Todo: {:?}", resp.into_inner()),
                    Err(status) => format!("Error getting todo: {}", status.message()),
                }
            }
            Some(MenuChoice::Update) => {
                let Some(item) = prompt.ask_item("Enter ID to update: ", false).await? else {
                    return Ok(());
                };
                match client.update_todo(item).await {
                    Ok(resp) => format!("Updated Todo: {:?}", resp.into_inner()),
                    Err(status) => format!("Error updating todo: {}", status.message()),
                }
            }
            Some(MenuChoice::Delete) => {
                let Some(id) = prompt.ask("Enter ID to delete: ").await? else {
                    return Ok(());
                };
                match client.delete_todo(TodoId::new(id)).await {
                    Ok(_) => "Todo deleted.".to_string(),
                    Err(status) => format!("Error deleting todo: {}", status.message()),
                }
            }
            Some(MenuChoice::Exit) => return Ok(()),
            None => "Invalid choice. Please select 1-6.".to_string(),
        };

        prompt.say_line(&line).await?;
    }
}
