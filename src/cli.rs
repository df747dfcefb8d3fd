//! 명령줄 인터페이스
//!
//! 화면 없이 폼 유틸리티를 실행해 볼 수 있는 명령들을 제공합니다.
//!
//! - list: URL에서 항목을 받아 목록을 채우고 출력
//! - submit: 이름/값 쌍으로 구성한 폼을 서버에 제출
//! - now: 현재 날짜·시간 표시 문자열 출력
//! - check: 값 하나에 검증기를 실행

use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};
use tokio::sync::Mutex;

use crate::config::ClientConfig;
use crate::domain::dto::FormField;
use crate::errors::{ErrorContext, FormError, FormResult};
use crate::services::formatting::{current_date_display, current_time_display};
use crate::services::notifier::Notifier;
use crate::services::remote::{BASE_URL_FIELD, RemoteFormService};
use crate::services::validation::FieldValidator;
use crate::ui::{FormControl, HtmlForm, ListControl, SelectList, TextField, TextInput};
use crate::utils::display_terminal::{print_boxed_title, print_check_result, print_option_list};

/// clap이 해석하는 최상위 명령줄 구조
#[derive(Parser, Debug)]
#[command(name = "form_utils")]
#[command(about = "Form validation, date/time formatting and JSON form helpers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 사용 가능한 명령
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Populate a list from a URL and print its options
    List {
        /// Absolute URL returning the response envelope
        url: String,
    },
    /// Submit name/value pairs to the server
    Submit {
        /// Relative URL appended to the base URL (starts with "/")
        relative_url: String,
        /// Form field as NAME=VALUE (repeatable)
        #[arg(short = 'f', long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,
        /// Base URL placed in the hiddenURL field
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the current date and time display strings
    Now,
    /// Run a validator on a value
    Check {
        #[arg(value_enum)]
        kind: CheckKind,
        /// Value to check (omit to check a control without a value)
        #[arg(allow_negative_numbers = true)]
        value: Option<String>,
        /// Field name shown in messages
        #[arg(short, long, default_value = "Value")]
        name: String,
        /// Maximum length for the length check
        #[arg(short, long, default_value_t = 50)]
        max: usize,
    },
}

/// `check` 명령이 실행할 검증기
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckKind {
    Required,
    Numeric,
    Integral,
    Positive,
    Length,
    Date,
    Time,
}

/// 명령을 실행합니다. 성공하면 `true`를 반환합니다.
///
/// 실패 내용은 이미 `notifier`로 사용자에게 전달된 상태입니다.
pub async fn run(cli: Cli, config: &ClientConfig, notifier: Arc<dyn Notifier>) -> bool {
    match cli.command {
        Commands::List { url } => match RemoteFormService::from_config(config, notifier.clone()) {
            Ok(service) => list(Arc::new(service), &url, notifier).await.is_ok(),
            Err(e) => {
                notifier.notify(None, e.user_message());
                false
            }
        },
        Commands::Submit {
            relative_url,
            fields,
            base_url,
        } => submit(&relative_url, &fields, base_url, config, notifier).await,
        Commands::Now => {
            println!("{}", current_date_display());
            println!("{}", current_time_display());
            true
        }
        Commands::Check {
            kind,
            value,
            name,
            max,
        } => {
            let passed = check_value(kind, value.as_deref(), max, &name, notifier.as_ref());
            let kind_name = kind
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default();
            print_check_result(&kind_name, value.as_deref().unwrap_or("(none)"), passed);
            passed
        }
    }
}

/// 백그라운드 작업으로 목록을 채운 뒤 옵션을 출력합니다.
async fn list(service: Arc<RemoteFormService>, url: &str, notifier: Arc<dyn Notifier>) -> FormResult<usize> {
    let options = Arc::new(Mutex::new(SelectList::new()));
    let result = service
        .spawn_populate_list(Arc::clone(&options), url)
        .await
        .context("목록 채우기 작업이 중단되었습니다")
        .and_then(|populated| populated);

    if let Err(FormError::InternalError(msg)) = &result {
        error!("{}", msg);
        notifier.notify(None, msg);
    }

    print_boxed_title(url);
    print_option_list(options.lock().await.options());
    result
}

async fn submit(
    relative_url: &str,
    fields: &[String],
    base_url: Option<String>,
    config: &ClientConfig,
    notifier: Arc<dyn Notifier>,
) -> bool {
    let service = match RemoteFormService::from_config(config, notifier.clone()) {
        Ok(service) => service,
        Err(e) => {
            notifier.notify(None, e.user_message());
            return false;
        }
    };

    let form = build_form(fields, base_url);
    let ok = service.submit_form(&form, relative_url).await.is_ok();
    if ok {
        info!("제출 성공: {}", relative_url);
        println!("Saved.");
    }
    ok
}

/// `NAME=VALUE` 인자들로 폼을 구성합니다. `base_url`은 숨김 필드로 들어갑니다.
pub fn build_form(fields: &[String], base_url: Option<String>) -> HtmlForm {
    let mut form = HtmlForm::new();
    if let Some(base_url) = base_url {
        form.push(FormControl::hidden(BASE_URL_FIELD, base_url));
    }
    for pair in fields {
        let field = FormField::parse_pair(pair);
        form.push(FormControl::input(field.name, field.value));
    }
    form
}

/// 값 하나에 검증기를 실행합니다. `value`가 `None`이면 값이 없는 컨트롤로 취급합니다.
pub fn check_value(kind: CheckKind, value: Option<&str>, max: usize, name: &str, notifier: &dyn Notifier) -> bool {
    let validator = FieldValidator::new(notifier);
    let input = match value {
        Some(value) => TextInput::new(value),
        None => TextInput::empty(),
    };
    let control: &dyn TextField = &input;

    match kind {
        CheckKind::Required => validator.validate_is_not_empty(Some(control), name),
        CheckKind::Numeric => validator.validate_is_numeric(control, name),
        CheckKind::Integral => validator.validate_is_integral(control, name),
        CheckKind::Positive => validator.validate_is_positive(control, name),
        CheckKind::Length => validator.validate_length(control, max, name),
        CheckKind::Date => validator.validate_date(Some(control), name),
        CheckKind::Time => validator.validate_time(Some(control), name),
    }
}
