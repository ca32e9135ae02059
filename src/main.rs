use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use hongik_timer::api::router::{self, AUTH_HEADER};
use hongik_timer::api::{CreateClubRequest, Endpoint, SaveGoalRequest, SignUpRequest};
use hongik_timer::config::AppConfig;
use hongik_timer::reactor::Reducer;
use hongik_timer::screens::sign_up::{SignUpMutation, SignUpReactor, SignUpState};
use hongik_timer::session::{SecureString, SessionContext};
use hongik_timer::telemetry;
use hongik_timer::validation::Advisory;

/// Developer tools for the study timer core.
#[derive(Debug, Parser)]
#[command(name = "hongik-timer", version, about)]
struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the request an endpoint builds to
    Route {
        #[arg(long)]
        user_id: Option<i64>,
        #[arg(long, default_value = "")]
        token: String,
        #[command(subcommand)]
        endpoint: EndpointArg,
    },
    /// Run the sign-up form validation over the given inputs
    Validate {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        nickname: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        password_check: String,
    },
    /// Print the resolved configuration
    Config,
}

#[derive(Debug, Subcommand)]
enum EndpointArg {
    TodayTime,
    PostTime {
        seconds: u64,
    },
    SaveGoal {
        goal: String,
    },
    GetClub {
        club_id: i64,
    },
    CreateClub {
        name: String,
        members: u8,
        #[arg(default_value = "")]
        info: String,
    },
    Register {
        email: String,
        username: String,
        password: String,
    },
}

impl From<EndpointArg> for Endpoint {
    fn from(arg: EndpointArg) -> Self {
        match arg {
            EndpointArg::TodayTime => Endpoint::GetTodayTime,
            EndpointArg::PostTime { seconds } => Endpoint::PostTime { seconds },
            EndpointArg::SaveGoal { goal } => Endpoint::SaveGoal(SaveGoalRequest { goal }),
            EndpointArg::GetClub { club_id } => Endpoint::GetClub { club_id },
            EndpointArg::CreateClub {
                name,
                members,
                info,
            } => Endpoint::CreateClub(CreateClubRequest {
                club_name: name,
                num_of_member: members,
                club_info: info,
            }),
            EndpointArg::Register {
                email,
                username,
                password,
            } => Endpoint::RegisterEmail(SignUpRequest {
                email,
                username,
                password: SecureString::new(password),
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    telemetry::init_tracing(&config.logging.level);

    match cli.command {
        Command::Route {
            user_id,
            token,
            endpoint,
        } => {
            let session = SessionContext {
                user_id,
                token: SecureString::new(token),
            };
            let has_token = !session.token.is_empty();
            let endpoint = Endpoint::from(endpoint);
            let request = router::build(&endpoint, &session)
                .with_context(|| format!("building {}", endpoint.name()))?;

            let headers: serde_json::Map<String, serde_json::Value> = request
                .headers
                .iter()
                .map(|(name, value)| {
                    let shown = if *name == AUTH_HEADER && has_token {
                        "<redacted>"
                    } else {
                        value.as_str()
                    };
                    (name.to_string(), json!(shown))
                })
                .collect();
            let output = json!({
                "endpoint": endpoint.name(),
                "method": request.method.as_str(),
                "url": request.url(&config.api.base_url),
                "headers": headers,
                "body": request.body_json(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Command::Validate {
            email,
            nickname,
            password,
            password_check,
        } => {
            let state = [
                SignUpMutation::ValidateEmail(email),
                SignUpMutation::ValidateNickname(nickname),
                SignUpMutation::ValidatePassword(password),
                SignUpMutation::ValidatePasswordCheck(password_check),
                SignUpMutation::UpdateRegisterEnabled,
            ]
            .into_iter()
            .fold(SignUpState::default(), SignUpReactor::reduce);

            print_field("email", state.is_valid_email, &state.email_message);
            print_field("nickname", state.is_valid_nickname, &state.nickname_message);
            print_field("password", state.is_valid_password, &state.password_message);
            print_field(
                "password-check",
                state.is_valid_password_check,
                &state.password_check_message,
            );
            println!("register enabled: {}", state.register_enabled);
        }
        Command::Config => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn print_field(name: &str, is_valid: bool, message: &Advisory) {
    let mark = if is_valid { "ok" } else { "--" };
    println!("{:<15} {} {}", name, mark, message.text());
}
