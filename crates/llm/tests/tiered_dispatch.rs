//! Tiered dispatch against scripted interpreters

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use voice_command_core::{
    BusinessContext, Error, IntentInterpreter, IntentResult, Language, ProcessingMethod, Result,
};
use voice_command_llm::{DispatcherConfig, TieredDispatcher, UsagePeriod};
use voice_command_text_processing::CommandExtractor;

/// Transcript the local extractor cannot classify
const UNCLEAR: &str = "why not";

enum Behavior {
    Answer(&'static str),
    Fail,
    Hang,
    Unavailable,
}

struct Mock {
    name: &'static str,
    behavior: Behavior,
    calls: AtomicUsize,
}

impl Mock {
    fn new(name: &'static str, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            name,
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntentInterpreter for Mock {
    async fn process_command(&self, text: &str) -> Result<IntentResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let intent = match self.behavior {
            Behavior::Answer(intent) => intent,
            Behavior::Fail | Behavior::Unavailable => {
                return Err(Error::Provider("HTTP 503: overloaded".into()))
            }
            Behavior::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                "SEARCH_COMMAND"
            }
        };
        let mut result = IntentResult::unknown(text, Language::English);
        result.intent = intent.to_string();
        result.confidence = 0.9;
        result.payload.query = Some("from ai".into());
        Ok(result)
    }

    fn is_available(&self) -> bool {
        !matches!(self.behavior, Behavior::Unavailable)
    }

    fn cost_per_call(&self) -> f64 {
        0.003
    }

    fn name(&self) -> &str {
        self.name
    }
}

fn dispatcher(
    primary: Option<Arc<Mock>>,
    fallback: Option<Arc<Mock>>,
    config: DispatcherConfig,
) -> TieredDispatcher {
    TieredDispatcher::new(
        Arc::new(CommandExtractor::default()),
        primary.map(|m| m as Arc<dyn IntentInterpreter>),
        fallback.map(|m| m as Arc<dyn IntentInterpreter>),
        config,
    )
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 9, 30, 0).unwrap()
}

mod routing {
    use super::*;

    #[tokio::test]
    async fn test_local_result_short_circuits() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let dispatcher = dispatcher(Some(primary.clone()), None, DispatcherConfig::default());

        let outcome = dispatcher.process("show me hot leads in mumbai").await;
        assert_eq!(outcome.method, ProcessingMethod::Local);
        assert_eq!(outcome.cost_usd, 0.0);
        assert_eq!(outcome.provider, None);
        assert_eq!(outcome.result.intent, "SHOW_COMMAND");
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_local_escalates_to_primary() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let dispatcher = dispatcher(Some(primary.clone()), None, DispatcherConfig::default());

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.method, ProcessingMethod::Ai);
        assert_eq!(outcome.provider.as_deref(), Some("primary"));
        assert_eq!(outcome.cost_usd, 0.003);
        assert_eq!(outcome.result.intent, "SEARCH_COMMAND");
        assert_eq!(outcome.result.original_text, UNCLEAR);

        let usage = dispatcher.usage();
        assert_eq!(usage.calls, 1);
        assert_eq!(usage.in_flight, 0);
        assert!((usage.cost_usd - 0.003).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_low_confidence_escalates_above_threshold() {
        let primary = Mock::new("primary", Behavior::Answer("SHOW_COMMAND"));
        let config = DispatcherConfig {
            escalation_threshold: 0.9,
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), None, config);

        // show + leads scores 0.8 locally
        let outcome = dispatcher.process("show leads").await;
        assert_eq!(outcome.method, ProcessingMethod::Ai);
        assert_eq!(primary.calls(), 1);
    }

    #[tokio::test]
    async fn test_primary_failure_uses_fallback_once() {
        let primary = Mock::new("primary", Behavior::Fail);
        let backup = Mock::new("backup", Behavior::Answer("CALL_COMMAND"));
        let config = DispatcherConfig::default();
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup.clone()), config);

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.method, ProcessingMethod::Ai);
        assert_eq!(outcome.provider.as_deref(), Some("backup"));
        assert_eq!(outcome.result.intent, "CALL_COMMAND");
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 1);
        assert_eq!(dispatcher.usage().calls, 1);
    }

    #[tokio::test]
    async fn test_unavailable_primary_uses_fallback() {
        let primary = Mock::new("primary", Behavior::Unavailable);
        let backup = Mock::new("backup", Behavior::Answer("SEND_COMMAND"));
        let config = DispatcherConfig::default();
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup), config);

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.provider.as_deref(), Some("backup"));
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_providers_failing_returns_local_result() {
        let primary = Mock::new("primary", Behavior::Fail);
        let backup = Mock::new("backup", Behavior::Fail);
        let dispatcher = dispatcher(Some(primary), Some(backup), DispatcherConfig::default());

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.method, ProcessingMethod::Fallback);
        assert_eq!(outcome.cost_usd, 0.0);
        assert!(outcome.result.is_unknown());
        assert_eq!(outcome.result.original_text, UNCLEAR);

        let usage = dispatcher.usage();
        assert_eq!(usage.calls, 0);
        assert_eq!(usage.in_flight, 0);
    }

    #[tokio::test]
    async fn test_unknown_ai_reply_is_free_and_final() {
        let primary = Mock::new("primary", Behavior::Answer("UNKNOWN_INTENT"));
        let backup = Mock::new("backup", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig::default();
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup.clone()), config);

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.method, ProcessingMethod::Fallback);
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 0);
        assert_eq!(dispatcher.usage().calls, 0);
        assert_eq!(dispatcher.usage().cost_usd, 0.0);
    }

    #[tokio::test]
    async fn test_unknown_noise_reaches_primary_by_default() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let dispatcher = dispatcher(Some(primary.clone()), None, DispatcherConfig::default());

        for transcript in ["um please ok", ""] {
            let outcome = dispatcher.process(transcript).await;
            assert_eq!(outcome.method, ProcessingMethod::Ai, "{:?}", transcript);
        }
        assert_eq!(primary.calls(), 2);
        assert_eq!(dispatcher.usage().calls, 2);
    }

    #[tokio::test]
    async fn test_noise_only_transcript_stays_local_when_skipped() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            skip_noise_only: true,
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), None, config);

        let outcome = dispatcher.process("um please ok").await;
        assert_eq!(outcome.method, ProcessingMethod::Fallback);
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn test_context_is_handed_back() {
        let dispatcher = dispatcher(None, None, DispatcherConfig::default());
        let context = BusinessContext::new().with_leads(12).with_payments(3);

        let local = dispatcher
            .process_with_context("hot leads dikhao", context.clone())
            .await;
        assert_eq!(local.method, ProcessingMethod::Local);
        assert_eq!(local.context.as_ref(), Some(&context));

        let fallback = dispatcher.process_with_context(UNCLEAR, context.clone()).await;
        assert_eq!(fallback.method, ProcessingMethod::Fallback);
        assert_eq!(fallback.context, Some(context));

        assert_eq!(dispatcher.process(UNCLEAR).await.context, None);
    }
}

mod time_limits {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_as_failure() {
        let primary = Mock::new("primary", Behavior::Hang);
        let backup = Mock::new("backup", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            provider_timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup.clone()), config);

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.provider.as_deref(), Some("backup"));
        assert_eq!(primary.calls(), 1);
        assert_eq!(dispatcher.usage().calls, 1);
        assert_eq!(dispatcher.usage().in_flight, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_without_fallback() {
        let primary = Mock::new("primary", Behavior::Hang);
        let config = DispatcherConfig {
            provider_timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary), None, config);

        let outcome = dispatcher.process(UNCLEAR).await;
        assert_eq!(outcome.method, ProcessingMethod::Fallback);
        assert_eq!(dispatcher.usage().calls, 0);
        assert_eq!(dispatcher.usage().in_flight, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_abandons_ai_tier() {
        let primary = Mock::new("primary", Behavior::Hang);
        let backup = Mock::new("backup", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig::default();
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup.clone()), config);

        let cancel = tokio::time::sleep(Duration::from_millis(50));
        let outcome = dispatcher.process_cancellable(UNCLEAR, cancel).await;
        assert_eq!(outcome.method, ProcessingMethod::Fallback);
        assert_eq!(outcome.cost_usd, 0.0);
        assert_eq!(primary.calls(), 1);
        assert_eq!(backup.calls(), 0);
        assert_eq!(dispatcher.usage().in_flight, 0);
    }

    #[tokio::test]
    async fn test_cancel_never_firing_is_harmless() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let dispatcher = dispatcher(Some(primary), None, DispatcherConfig::default());

        let (_tx, rx) = tokio::sync::oneshot::channel::<()>();
        let outcome = dispatcher
            .process_cancellable(UNCLEAR, async move {
                let _ = rx.await;
            })
            .await;
        assert_eq!(outcome.method, ProcessingMethod::Ai);
    }
}

mod budget {
    use super::*;

    #[tokio::test]
    async fn test_budget_exhaustion_falls_back() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let backup = Mock::new("backup", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            monthly_budget: 2,
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), Some(backup.clone()), config);

        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Ai);
        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Ai);
        let third = dispatcher.process(UNCLEAR).await;
        assert_eq!(third.method, ProcessingMethod::Fallback);
        assert_eq!(third.cost_usd, 0.0);

        assert_eq!(primary.calls(), 2);
        assert_eq!(backup.calls(), 0);
        let usage = dispatcher.usage();
        assert_eq!(usage.calls, 2);
        assert_eq!(usage.remaining(), 0);
    }

    #[tokio::test]
    async fn test_zero_budget_never_calls_providers() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            monthly_budget: 0,
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), None, config);

        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Fallback);
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn test_month_rollover_restores_budget() {
        let now = Arc::new(Mutex::new(at(2025, 1, 31)));
        let clock_now = Arc::clone(&now);
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            monthly_budget: 1,
            ..Default::default()
        };
        let dispatcher = dispatcher(Some(primary.clone()), None, config)
            .with_clock(Arc::new(move || *clock_now.lock()));

        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Ai);
        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Fallback);

        *now.lock() = at(2025, 2, 1);
        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Ai);
        assert_eq!(dispatcher.process(UNCLEAR).await.method, ProcessingMethod::Fallback);

        let usage = dispatcher.usage();
        assert_eq!(usage.calls, 1);
        assert_eq!(usage.period, UsagePeriod { year: 2025, month: 2 });
        assert_eq!(primary.calls(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_sessions_respect_budget() {
        let primary = Mock::new("primary", Behavior::Answer("SEARCH_COMMAND"));
        let config = DispatcherConfig {
            monthly_budget: 5,
            ..Default::default()
        };
        let dispatcher = Arc::new(dispatcher(Some(primary.clone()), None, config));

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let dispatcher = Arc::clone(&dispatcher);
                tokio::spawn(async move { dispatcher.process(UNCLEAR).await.method })
            })
            .collect();

        let mut ai = 0;
        for handle in handles {
            if handle.await.unwrap() == ProcessingMethod::Ai {
                ai += 1;
            }
        }

        assert_eq!(ai, 5);
        assert_eq!(primary.calls(), 5);
        let usage = dispatcher.usage();
        assert_eq!(usage.calls, 5);
        assert_eq!(usage.in_flight, 0);
        assert!((usage.cost_usd - 0.015).abs() < 1e-9);
    }
}
