//! Tiered dispatch
//!
//! Runs the free local extractor first and only pays for an AI interpreter
//! when the local result is unknown or below the escalation threshold:
//!
//! 1. local extraction; good enough => `local`, cost 0
//! 2. primary provider within the monthly budget; a known intent => `ai`
//! 3. if the primary fails (error, timeout, unavailable), the fallback
//!    provider once
//! 4. otherwise the local result as-is => `fallback`, cost 0
//!
//! Provider errors never reach the caller.

use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::timeout;
use tracing::{debug, info, warn};
use voice_command_config::constants::dispatcher::{
    DEFAULT_ESCALATION_THRESHOLD, DEFAULT_MONTHLY_BUDGET, DEFAULT_PROVIDER_TIMEOUT_MS,
};
use voice_command_config::{DispatcherSettings, ProviderSettings, Settings};
use voice_command_core::{
    BusinessContext, Error, IntentInterpreter, IntentResult, ProcessingMethod, Result, TieredResult,
};
use voice_command_text_processing::{CommandExtractor, Lexicon};

use crate::factory::create_interpreter_with;
use crate::usage::{UsageSnapshot, UsageTracker};

/// Source of wall-clock time for month rollover
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

type Interpreter = Arc<dyn IntentInterpreter>;

/// Dispatcher tuning
#[derive(Debug, Clone, PartialEq)]
pub struct DispatcherConfig {
    /// AI calls allowed per calendar month
    pub monthly_budget: u32,
    /// Escalate when local confidence is below this
    pub escalation_threshold: f32,
    /// Per-call provider timeout
    pub provider_timeout: Duration,
    /// Never escalate transcripts made only of fillers and connectives
    pub skip_noise_only: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
            escalation_threshold: DEFAULT_ESCALATION_THRESHOLD,
            provider_timeout: Duration::from_millis(DEFAULT_PROVIDER_TIMEOUT_MS),
            skip_noise_only: false,
        }
    }
}

impl From<&DispatcherSettings> for DispatcherConfig {
    fn from(settings: &DispatcherSettings) -> Self {
        Self {
            monthly_budget: settings.monthly_budget,
            escalation_threshold: settings.escalation_threshold,
            provider_timeout: Duration::from_millis(settings.provider_timeout_ms),
            skip_noise_only: settings.skip_noise_only,
        }
    }
}

/// Cost-aware dispatcher over the local extractor and AI interpreters
pub struct TieredDispatcher {
    extractor: Arc<CommandExtractor>,
    primary: Option<Interpreter>,
    fallback: Option<Interpreter>,
    config: DispatcherConfig,
    usage: UsageTracker,
    clock: Clock,
}

impl TieredDispatcher {
    pub fn new(
        extractor: Arc<CommandExtractor>,
        primary: Option<Arc<dyn IntentInterpreter>>,
        fallback: Option<Arc<dyn IntentInterpreter>>,
        config: DispatcherConfig,
    ) -> Self {
        let clock: Clock = Arc::new(Utc::now);
        Self {
            usage: UsageTracker::new(config.monthly_budget, clock()),
            extractor,
            primary,
            fallback,
            config,
            clock,
        }
    }

    /// Build the extractor and providers from settings
    ///
    /// Disabled providers are skipped. An enabled provider whose API key is
    /// missing is a configuration error.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let extractor = CommandExtractor::from_settings(&settings.extractor)?;
        let config = DispatcherConfig::from(&settings.dispatcher);

        let dispatcher = &settings.dispatcher;
        let (lexicon, limit) = (extractor.lexicon(), config.provider_timeout);
        let primary = Self::build_provider("primary", &dispatcher.primary, lexicon, limit)?;
        let fallback = Self::build_provider("fallback", &dispatcher.fallback, lexicon, limit)?;

        Ok(Self::new(Arc::new(extractor), primary, fallback, config))
    }

    fn build_provider(
        slot: &str,
        provider: &Option<ProviderSettings>,
        lexicon: &Lexicon,
        provider_timeout: Duration,
    ) -> Result<Option<Interpreter>> {
        match provider {
            Some(p) if p.enabled => {
                let interpreter = create_interpreter_with(p, lexicon, provider_timeout)?;
                Ok(Some(interpreter))
            }
            Some(p) => {
                info!(slot, provider = p.kind.as_str(), "AI provider disabled; skipping");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Replace the wall-clock source, resetting the usage counters
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.usage = UsageTracker::new(self.config.monthly_budget, clock());
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.extractor.lexicon()
    }

    /// Current month's AI usage
    pub fn usage(&self) -> UsageSnapshot {
        self.usage.snapshot()
    }

    /// Interpret a transcript
    pub async fn process(&self, text: &str) -> TieredResult {
        self.run(text, None, future::pending::<()>()).await
    }

    /// Interpret a transcript, handing `context` back in the result
    pub async fn process_with_context(&self, text: &str, context: BusinessContext) -> TieredResult {
        self.run(text, Some(context), future::pending::<()>()).await
    }

    /// Interpret a transcript, abandoning any AI call once `cancel` completes
    ///
    /// A cancelled call falls back to the local result and costs nothing.
    pub async fn process_cancellable<F>(&self, text: &str, cancel: F) -> TieredResult
    where
        F: Future<Output = ()>,
    {
        self.run(text, None, cancel).await
    }

    async fn run<F>(&self, text: &str, context: Option<BusinessContext>, cancel: F) -> TieredResult
    where
        F: Future<Output = ()>,
    {
        let local = self.extractor.process(text);

        if !self.should_escalate(&local) {
            debug!(intent = %local.intent, confidence = local.confidence, "Local result accepted");
            return Self::finish(local, ProcessingMethod::Local, 0.0, None, context);
        }

        if self.config.skip_noise_only && self.extractor.is_noise_only(text) {
            debug!("Noise-only transcript; not escalating");
            return Self::finish(local, ProcessingMethod::Fallback, 0.0, None, context);
        }

        info!(
            intent = %local.intent,
            confidence = local.confidence,
            threshold = self.config.escalation_threshold,
            "Escalating to AI tier"
        );

        tokio::pin!(cancel);
        for interpreter in self.primary.iter().chain(self.fallback.iter()) {
            let provider = interpreter.name().to_string();
            match self.call(interpreter.as_ref(), text, cancel.as_mut()).await {
                Ok(Some((result, cost))) => {
                    info!(
                        provider = %provider,
                        intent = %result.intent,
                        confidence = result.confidence,
                        cost_usd = cost,
                        "AI tier answered"
                    );
                    return Self::finish(
                        result,
                        ProcessingMethod::Ai,
                        cost,
                        Some(provider),
                        context,
                    );
                }
                Ok(None) => {
                    debug!(provider = %provider, "AI tier returned unknown intent");
                    break;
                }
                Err(Error::Cancelled) => {
                    info!(provider = %provider, "AI call cancelled by caller");
                    break;
                }
                Err(e @ Error::BudgetExhausted { .. }) => {
                    warn!(error = %e, "Skipping AI tier");
                    break;
                }
                Err(e) => {
                    warn!(provider = %provider, error = %e, "AI provider failed");
                }
            }
        }

        Self::finish(local, ProcessingMethod::Fallback, 0.0, None, context)
    }

    fn should_escalate(&self, local: &IntentResult) -> bool {
        local.is_unknown() || local.confidence < self.config.escalation_threshold
    }

    /// One budgeted, time-limited provider call
    ///
    /// `Ok(None)` means the provider answered with an unknown intent; the
    /// reserved slot is released and nothing is charged.
    async fn call<F>(
        &self,
        interpreter: &dyn IntentInterpreter,
        text: &str,
        cancel: Pin<&mut F>,
    ) -> Result<Option<(IntentResult, f64)>>
    where
        F: Future<Output = ()>,
    {
        if !interpreter.is_available() {
            return Err(Error::Provider(format!("{} is unavailable", interpreter.name())));
        }

        self.usage.reset_if_new_month((self.clock)());
        let slot = self.usage.try_reserve()?;

        let result = tokio::select! {
            biased;
            _ = cancel => return Err(Error::Cancelled),
            outcome = timeout(self.config.provider_timeout, interpreter.process_command(text)) => {
                match outcome {
                    Ok(result) => result?,
                    Err(_) => {
                        let millis = self.config.provider_timeout.as_millis() as u64;
                        return Err(Error::Timeout(millis));
                    }
                }
            }
        };

        if result.is_unknown() {
            return Ok(None);
        }

        let cost = interpreter.cost_per_call();
        slot.commit(cost);
        Ok(Some((result, cost)))
    }

    fn finish(
        result: IntentResult,
        method: ProcessingMethod,
        cost_usd: f64,
        provider: Option<String>,
        context: Option<BusinessContext>,
    ) -> TieredResult {
        TieredResult {
            result,
            method,
            cost_usd,
            provider,
            context,
        }
    }
}
