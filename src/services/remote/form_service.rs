//! # 원격 폼 서비스
//!
//! 서버 응답 봉투 계약을 따르는 엔드포인트로 폼을 제출하고 목록을 채웁니다.
//!
//! ## 결과 규칙
//!
//! | 상황 | 반환값 | 알림 |
//! |------|--------|------|
//! | 성공 | `Ok(..)` | 없음 |
//! | `HasErrors == true` | `Err(ServerValidationError(ErrorMessage))` | `ErrorMessage` |
//! | 네트워크/상태/디코딩 실패 | `Err(TransportError(원본 텍스트))` | 원본 텍스트 |
//! | 기본 URL 없음 (제출 시) | `Err(ConfigError(..))` | 설정 안내 |
//!
//! 모든 실패 경로는 알림을 표시한 뒤 에러를 반환합니다.

use std::sync::Arc;

use log::{debug, error, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use super::transport::{HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::domain::dto::ResponseEnvelope;
use crate::errors::{FormError, FormResult};
use crate::services::notifier::Notifier;
use crate::ui::{FormSource, ListControl};

/// 서버 기본 URL을 담고 있는 페이지 숨김 필드의 이름
pub const BASE_URL_FIELD: &str = "hiddenURL";

/// 목록을 한 개의 빈 옵션만 남도록 초기화합니다.
///
/// 여러 번 호출해도 결과는 같습니다.
pub fn reset_list<L: ListControl + ?Sized>(list: &mut L) {
    list.clear_options();
    list.append_option("", "");
}

/// 원격 폼 헬퍼 서비스
///
/// 전송 계층과 알림 채널을 주입받아 사용합니다.
///
/// ```rust,ignore
/// let service = RemoteFormService::from_config(&config, Arc::new(LogNotifier))?;
///
/// if service.submit_form(&form, "/Orders/Save").await.is_err() {
///     return;
/// }
/// service.populate_list(&mut regions, "http://server/Lookup/Regions").await.ok();
/// ```
pub struct RemoteFormService {
    transport: Arc<dyn Transport>,
    notifier: Arc<dyn Notifier>,
    fallback_base_url: Option<String>,
}

impl RemoteFormService {
    pub fn new(transport: Arc<dyn Transport>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            transport,
            notifier,
            fallback_base_url: None,
        }
    }

    /// 설정으로부터 `reqwest` 전송 계층과 기본 URL을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::ConfigError` - HTTP 클라이언트 생성 실패
    pub fn from_config(config: &ClientConfig, notifier: Arc<dyn Notifier>) -> FormResult<Self> {
        let transport = HttpTransport::from_config(config)?;
        let service = Self::new(Arc::new(transport), notifier);

        Ok(match &config.base_url {
            Some(base_url) => service.with_fallback_base_url(base_url.clone()),
            None => service,
        })
    }

    /// 폼에 `hiddenURL` 필드가 없을 때 사용할 기본 URL을 지정합니다.
    pub fn with_fallback_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.fallback_base_url = Some(base_url.into());
        self
    }

    /// 폼 데이터를 서버에 저장합니다.
    ///
    /// 요청 URL은 `hiddenURL` 값(없으면 설정된 기본 URL) 뒤에 `relative_url`을 그대로 이어 붙여 만듭니다.
    /// `relative_url`은 `/`로 시작해야 합니다.
    ///
    /// # Errors
    ///
    /// * `FormError::ServerValidationError` - 서버가 `HasErrors`를 보고함
    /// * `FormError::TransportError` - 네트워크, HTTP 상태, 응답 디코딩 실패
    /// * `FormError::ConfigError` - 기본 URL을 찾을 수 없음
    pub async fn submit_form<F: FormSource + ?Sized>(&self, form: &F, relative_url: &str) -> FormResult<()> {
        let result = self.try_submit(form, relative_url).await;
        if let Err(e) = &result {
            self.report(e);
        }
        result
    }

    async fn try_submit<F: FormSource + ?Sized>(&self, form: &F, relative_url: &str) -> FormResult<()> {
        let base_url = form
            .hidden_value(BASE_URL_FIELD)
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.fallback_base_url.clone())
            .ok_or_else(|| {
                FormError::ConfigError(format!(
                    "Server address is not available: missing '{}' field",
                    BASE_URL_FIELD
                ))
            })?;

        let url = format!("{}{}", base_url, relative_url);
        let fields = form.serialize_array();

        let envelope = self.transport.post_form(&url, &fields).await?;
        ensure_no_errors(envelope)?;

        debug!("폼 제출 완료: {}", url);
        Ok(())
    }

    /// 서버에서 항목을 받아 목록을 채웁니다.
    ///
    /// 요청 전에 목록을 [`reset_list`]로 초기화하고, 성공하면 항목마다 값과 표시 이름이
    /// 같은 옵션을 하나씩 추가합니다. 실패하면 목록은 빈 옵션 하나만 남습니다.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - 추가된 옵션 수 (빈 옵션 제외)
    pub async fn populate_list<L: ListControl + ?Sized>(&self, list: &mut L, url: &str) -> FormResult<usize> {
        reset_list(list);

        let envelope = match self.transport.get_json(url).await.and_then(ensure_no_errors) {
            Ok(envelope) => envelope,
            Err(e) => {
                self.report(&e);
                return Err(e);
            }
        };

        for item in envelope.items() {
            list.append_option(item, item);
        }

        debug!("목록 채우기 완료: {} ({}개 항목)", url, envelope.items().len());
        Ok(envelope.items().len())
    }

    /// 목록 채우기를 백그라운드 작업으로 실행합니다.
    ///
    /// 호출자는 반환된 핸들을 기다리지 않아도 되며, 완료 순서는 호출 이후의 코드와 무관합니다.
    /// 같은 목록에 대한 동시 접근은 전달된 뮤텍스로 직렬화됩니다.
    pub fn spawn_populate_list<L>(
        self: &Arc<Self>,
        list: Arc<Mutex<L>>,
        url: impl Into<String>,
    ) -> JoinHandle<FormResult<usize>>
    where
        L: ListControl + Send + 'static,
    {
        let service = Arc::clone(self);
        let url = url.into();

        tokio::spawn(async move {
            let mut list = list.lock().await;
            service.populate_list(&mut *list, &url).await
        })
    }

    fn report(&self, error: &FormError) {
        match error {
            FormError::ServerValidationError(msg) => warn!("서버가 에러를 보고했습니다: {}", msg),
            FormError::TransportError(msg) => error!("원격 호출 실패: {}", msg),
            other => error!("원격 호출을 시작할 수 없습니다: {}", other),
        }
        self.notifier.notify(None, error.user_message());
    }
}

fn ensure_no_errors(envelope: ResponseEnvelope) -> FormResult<ResponseEnvelope> {
    if envelope.has_errors {
        return Err(FormError::ServerValidationError(envelope.error_message().to_string()));
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::FormField;
    use crate::services::notifier::{Notification, RecordingNotifier};
    use crate::ui::{FormControl, HtmlForm, SelectList, SelectOption};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    /// 고정 응답을 돌려주고 요청을 기록하는 전송 계층
    struct FakeTransport {
        response: FormResult<ResponseEnvelope>,
        requests: StdMutex<Vec<(String, String, Vec<FormField>)>>,
    }

    impl FakeTransport {
        fn new(response: FormResult<ResponseEnvelope>) -> Arc<Self> {
            Arc::new(Self {
                response,
                requests: StdMutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<(String, String, Vec<FormField>)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn post_form(&self, url: &str, fields: &[FormField]) -> FormResult<ResponseEnvelope> {
            self.requests
                .lock()
                .unwrap()
                .push(("POST".to_string(), url.to_string(), fields.to_vec()));
            self.response.clone()
        }

        async fn get_json(&self, url: &str) -> FormResult<ResponseEnvelope> {
            self.requests
                .lock()
                .unwrap()
                .push(("GET".to_string(), url.to_string(), Vec::new()));
            self.response.clone()
        }
    }

    fn service_with(
        response: FormResult<ResponseEnvelope>,
    ) -> (RemoteFormService, Arc<FakeTransport>, Arc<RecordingNotifier>) {
        let transport = FakeTransport::new(response);
        let notifier = Arc::new(RecordingNotifier::new());
        let service = RemoteFormService::new(transport.clone(), notifier.clone());
        (service, transport, notifier)
    }

    fn order_form() -> HtmlForm {
        HtmlForm::new()
            .with_control(FormControl::hidden(BASE_URL_FIELD, "http://intranet/app"))
            .with_control(FormControl::input("Name", "Widget"))
            .with_control(FormControl::input("Qty", "3"))
    }

    #[test]
    fn test_reset_list_is_idempotent() {
        let mut list = SelectList::with_options(vec![SelectOption::new("X", "X")]);

        reset_list(&mut list);
        reset_list(&mut list);

        assert_eq!(list.options(), [SelectOption::blank()]);
    }

    #[tokio::test]
    async fn test_populate_list_success() {
        let (service, transport, notifier) = service_with(Ok(ResponseEnvelope::with_items(["A", "B"])));
        let mut list = SelectList::with_options(vec![SelectOption::new("old", "old")]);

        let added = service.populate_list(&mut list, "http://intranet/app/Regions").await;

        assert_eq!(added, Ok(2));
        assert_eq!(list.values(), vec!["", "A", "B"]);
        assert_eq!(list.options()[1], SelectOption::new("A", "A"));
        assert!(notifier.is_empty());
        assert_eq!(transport.requests()[0].0, "GET");
        assert_eq!(transport.requests()[0].1, "http://intranet/app/Regions");
    }

    #[tokio::test]
    async fn test_populate_list_without_items_leaves_blank_option() {
        let (service, _, notifier) = service_with(Ok(ResponseEnvelope::success()));
        let mut list = SelectList::new();

        assert_eq!(service.populate_list(&mut list, "/x").await, Ok(0));
        assert_eq!(list.options(), [SelectOption::blank()]);
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_populate_list_server_error() {
        let (service, _, notifier) = service_with(Ok(ResponseEnvelope::error("x")));
        let mut list = SelectList::with_options(vec![SelectOption::new("old", "old")]);

        let result = service.populate_list(&mut list, "/Regions").await;

        assert_eq!(result, Err(FormError::ServerValidationError("x".to_string())));
        assert_eq!(list.options(), [SelectOption::blank()]);
        assert_eq!(
            notifier.notifications(),
            vec![Notification {
                field: None,
                message: "x".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_populate_list_transport_error_is_notified() {
        let (service, _, notifier) = service_with(Err(FormError::TransportError("Not Found".to_string())));
        let mut list = SelectList::new();

        let result = service.populate_list(&mut list, "/Regions").await;

        assert!(matches!(result, Err(FormError::TransportError(_))));
        assert_eq!(list.len(), 1);
        assert_eq!(notifier.messages(), vec!["Not Found"]);
    }

    #[tokio::test]
    async fn test_submit_form_success() {
        let (service, transport, notifier) = service_with(Ok(ResponseEnvelope::success()));

        let result = service.submit_form(&order_form(), "/Orders/Save").await;

        assert_eq!(result, Ok(()));
        assert!(notifier.is_empty());

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        let (method, url, fields) = &requests[0];
        assert_eq!(method, "POST");
        assert_eq!(url, "http://intranet/app/Orders/Save");
        assert_eq!(
            fields,
            &vec![
                FormField::new(BASE_URL_FIELD, "http://intranet/app"),
                FormField::new("Name", "Widget"),
                FormField::new("Qty", "3"),
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_form_server_error() {
        let (service, _, notifier) = service_with(Ok(ResponseEnvelope::error("Name already exists")));

        let result = service.submit_form(&order_form(), "/Orders/Save").await;

        assert_eq!(
            result,
            Err(FormError::ServerValidationError("Name already exists".to_string()))
        );
        assert_eq!(notifier.messages(), vec!["Name already exists"]);
    }

    #[tokio::test]
    async fn test_submit_form_transport_error() {
        let (service, _, notifier) = service_with(Err(FormError::TransportError("connection refused".to_string())));

        let result = service.submit_form(&order_form(), "/Orders/Save").await;

        assert!(result.as_ref().is_err_and(FormError::is_transport));
        assert_eq!(notifier.messages(), vec!["connection refused"]);
    }

    #[tokio::test]
    async fn test_submit_form_uses_fallback_base_url() {
        let (service, transport, _) = service_with(Ok(ResponseEnvelope::success()));
        let service = service.with_fallback_base_url("http://fallback");
        let form = HtmlForm::new().with_control(FormControl::input("Name", "Widget"));

        assert_eq!(service.submit_form(&form, "/Save").await, Ok(()));
        assert_eq!(transport.requests()[0].1, "http://fallback/Save");
    }

    #[tokio::test]
    async fn test_submit_form_blank_hidden_url_uses_fallback_base_url() {
        let (service, transport, notifier) = service_with(Ok(ResponseEnvelope::success()));
        let service = service.with_fallback_base_url("http://fallback");
        let form = HtmlForm::new()
            .with_control(FormControl::hidden(BASE_URL_FIELD, "   "))
            .with_control(FormControl::input("Name", "Widget"));

        assert_eq!(service.submit_form(&form, "/Save").await, Ok(()));
        assert_eq!(transport.requests()[0].1, "http://fallback/Save");
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_submit_form_without_base_url_fails_before_request() {
        let (service, transport, notifier) = service_with(Ok(ResponseEnvelope::success()));
        let form = HtmlForm::new().with_control(FormControl::input("Name", "Widget"));

        let result = service.submit_form(&form, "/Save").await;

        assert!(matches!(result, Err(FormError::ConfigError(_))));
        assert!(transport.requests().is_empty());
        assert_eq!(notifier.messages().len(), 1);
        assert!(notifier.messages()[0].contains(BASE_URL_FIELD));
    }

    #[tokio::test]
    async fn test_spawn_populate_list_completes_through_handle() {
        let (service, _, _) = service_with(Ok(ResponseEnvelope::with_items(["North", "South"])));
        let service = Arc::new(service);
        let list = Arc::new(Mutex::new(SelectList::new()));

        let handle = service.spawn_populate_list(Arc::clone(&list), "/Regions");
        let added = handle.await.unwrap();

        assert_eq!(added, Ok(2));
        assert_eq!(list.lock().await.values(), vec!["", "North", "South"]);
    }
}
