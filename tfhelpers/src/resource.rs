//! Provider configuration shared by resources
//!
//! A provider hands each resource an opaque `provider_data` value during
//! configure. [`BaseResource`] downcasts it to the provider type and keeps
//! the parts resources need: authentication, base URL and API client.

use std::any::Any;
use std::fmt;
use tfplug::types::Diagnostics;

/// What a provider exposes to its resources
pub trait BaseProvider: Send + Sync + 'static {
    type Auth: Clone + Send + Sync;
    type Client: Clone + Send + Sync;

    fn auth(&self) -> Option<Self::Auth>;
    fn base_url(&self) -> &str;
    fn client(&self) -> Option<Self::Client>;
}

#[derive(Debug, Clone, Default)]
pub struct BaseResourceConfig<A, C> {
    pub auth: Option<A>,
    pub base_url: String,
    pub client: Option<C>,
}

/// Configuration state embedded in a resource implementation
pub struct BaseResource<P: BaseProvider> {
    config: Option<BaseResourceConfig<P::Auth, P::Client>>,
}

impl<P: BaseProvider> BaseResource<P> {
    pub fn new(config: Option<BaseResourceConfig<P::Auth, P::Client>>) -> Self {
        Self { config }
    }

    /// Takes the provider's settings from `provider_data`
    ///
    /// `None` means the provider has not been configured yet, which happens
    /// during validation, and is not an error.
    pub fn configure(
        &mut self,
        provider_data: Option<&(dyn Any + Send + Sync)>,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(data) = provider_data else {
            tracing::debug!("No provider data, skipping resource configuration");
            return;
        };

        // `dyn Any` keeps no type name, so the id only goes to the log
        let Some(provider) = data.downcast_ref::<P>() else {
            tracing::error!(
                expected = std::any::type_name::<P>(),
                "Provider data type id: {:?}",
                data.type_id()
            );
            diagnostics.add_error(
                "Unexpected Data Type",
                format!(
                    "Expected BaseProvider, got: provider data that is not {}. Please report this issue to the provider developers.",
                    std::any::type_name::<P>()
                ),
            );
            return;
        };

        tracing::debug!("Configuring resource for {}", provider.base_url());
        self.config = Some(BaseResourceConfig {
            auth: provider.auth(),
            base_url: provider.base_url().to_string(),
            client: provider.client(),
        });
    }

    pub fn config(&self) -> Option<&BaseResourceConfig<P::Auth, P::Client>> {
        self.config.as_ref()
    }

    pub fn auth(&self) -> Option<&P::Auth> {
        self.config.as_ref().and_then(|c| c.auth.as_ref())
    }

    /// Empty until configured
    pub fn base_url(&self) -> &str {
        self.config.as_ref().map_or("", |c| c.base_url.as_str())
    }

    pub fn client(&self) -> Option<&P::Client> {
        self.config.as_ref().and_then(|c| c.client.as_ref())
    }

    /// Configured and holding a client
    pub fn is_configured(&self) -> bool {
        self.client().is_some()
    }
}

impl<P: BaseProvider> Default for BaseResource<P> {
    fn default() -> Self {
        Self { config: None }
    }
}

impl<P: BaseProvider> Clone for BaseResource<P> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
        }
    }
}

impl<P: BaseProvider> fmt::Debug for BaseResource<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseResource")
            .field("base_url", &self.base_url())
            .field("configured", &self.is_configured())
            .finish()
    }
}

pub fn has_error(diagnostics: &Diagnostics) -> bool {
    diagnostics.has_error()
}

/// Adds an error whose detail is built with `format_args!`
pub fn add_error_fmt(diagnostics: &mut Diagnostics, summary: &str, detail: fmt::Arguments<'_>) {
    diagnostics.add_error(summary, detail.to_string());
}

/// Adds an error and returns `true`, for `if ... { return add_error_and_return(..) }`
pub fn add_error_and_return(diagnostics: &mut Diagnostics, summary: &str, detail: &str) -> bool {
    diagnostics.add_error(summary, detail);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct ApiClient {
        endpoint: String,
    }

    struct TestProvider {
        token: Option<String>,
        url: String,
        client: Option<Arc<ApiClient>>,
    }

    impl BaseProvider for TestProvider {
        type Auth = String;
        type Client = Arc<ApiClient>;

        fn auth(&self) -> Option<String> {
            self.token.clone()
        }

        fn base_url(&self) -> &str {
            &self.url
        }

        fn client(&self) -> Option<Arc<ApiClient>> {
            self.client.clone()
        }
    }

    fn provider_with_client() -> TestProvider {
        TestProvider {
            token: Some("secret".to_string()),
            url: "https://api.example.com".to_string(),
            client: Some(Arc::new(ApiClient {
                endpoint: "https://api.example.com/v1".to_string(),
            })),
        }
    }

    #[test]
    fn unconfigured_resource_returns_empty_values() {
        let resource = BaseResource::<TestProvider>::default();

        assert!(resource.auth().is_none());
        assert_eq!(resource.base_url(), "");
        assert!(resource.client().is_none());
        assert!(!resource.is_configured());
    }

    #[test]
    fn configure_without_provider_data_is_a_no_op() {
        let mut resource = BaseResource::<TestProvider>::default();
        let mut diags = Diagnostics::new();

        resource.configure(None, &mut diags);

        assert!(diags.is_empty());
        assert!(!resource.is_configured());
    }

    #[test]
    fn configure_copies_provider_settings() {
        let provider: Arc<dyn Any + Send + Sync> = Arc::new(provider_with_client());
        let mut resource = BaseResource::<TestProvider>::default();
        let mut diags = Diagnostics::new();

        resource.configure(Some(provider.as_ref()), &mut diags);

        assert!(!has_error(&diags));
        assert!(resource.is_configured());
        assert_eq!(resource.auth().map(String::as_str), Some("secret"));
        assert_eq!(resource.base_url(), "https://api.example.com");
        assert_eq!(
            resource.client().map(|c| c.endpoint.as_str()),
            Some("https://api.example.com/v1")
        );
    }

    #[test]
    fn configure_rejects_other_types() {
        let mut resource = BaseResource::<TestProvider>::default();
        let mut diags = Diagnostics::new();

        resource.configure(Some(&42_u32), &mut diags);

        assert!(has_error(&diags));
        assert_eq!(diags.errors[0].summary, "Unexpected Data Type");
        let detail = &diags.errors[0].detail;
        assert!(detail.starts_with("Expected BaseProvider, got: provider data that is not "));
        assert!(detail.contains("TestProvider"));
        assert!(!detail.contains("TypeId"));
        assert!(!resource.is_configured());
    }

    #[test]
    fn configured_without_client_is_not_ready() {
        let provider = TestProvider {
            client: None,
            ..provider_with_client()
        };
        let mut resource = BaseResource::<TestProvider>::default();
        let mut diags = Diagnostics::new();

        resource.configure(Some(&provider), &mut diags);

        assert!(resource.config().is_some());
        assert!(!resource.is_configured());
    }

    #[test]
    fn new_accepts_prebuilt_config() {
        let resource = BaseResource::<TestProvider>::new(Some(BaseResourceConfig {
            auth: None,
            base_url: "http://localhost".to_string(),
            client: Some(Arc::new(ApiClient {
                endpoint: String::new(),
            })),
        }));

        assert!(resource.is_configured());
        assert_eq!(format!("{:?}", resource), "BaseResource { base_url: \"http://localhost\", configured: true }");
    }

    #[test]
    fn error_helpers_append_errors() {
        let mut diags = Diagnostics::new();

        add_error_fmt(&mut diags, "Bad input", format_args!("{} is not {}", "x", 42));
        let returned = add_error_and_return(&mut diags, "Failed", "details");

        assert!(returned);
        assert_eq!(diags.error_count(), 2);
        assert_eq!(diags.errors[0].detail, "x is not 42");
    }
}
