//! The prediction form: four sliders, one button, one outbound call.

use futures::future::Either;
use futures::future::select;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use iris_dto::PredictRequest;
use iris_dto::Prediction;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

/// Upper bound on the outbound call. No retry afterwards; a timed-out
/// call surfaces the same way as a refused connection.
const TIMEOUT_MS: u32 = 5_000;

/// Service base URL, compiled in from IRIS_API_URL with a local default.
fn base_url() -> &'static str {
    option_env!("IRIS_API_URL").unwrap_or("http://127.0.0.1:8000")
}

/// Terminal state of one prediction attempt.
#[derive(Debug, Clone)]
enum Outcome {
    Label(String),
    Unreachable,
    Failed(String),
}

async fn fetch(req: PredictRequest) -> Outcome {
    let url = format!("{}/predict", base_url().trim_end_matches('/'));
    let call = match Request::post(&url).json(&req) {
        Err(e) => return Outcome::Failed(e.to_string()),
        Ok(call) => call,
    };
    let sent = select(
        Box::pin(call.send()),
        Box::pin(TimeoutFuture::new(TIMEOUT_MS)),
    );
    let resp = match sent.await {
        Either::Right((_, _)) => return Outcome::Unreachable,
        Either::Left((Err(gloo_net::Error::JsError(_)), _)) => return Outcome::Unreachable,
        Either::Left((Err(e), _)) => return Outcome::Failed(e.to_string()),
        Either::Left((Ok(resp), _)) => resp,
    };
    if !resp.ok() {
        return Outcome::Failed(format!("service responded with status {}", resp.status()));
    }
    match resp.json::<Prediction>().await {
        Err(e) => Outcome::Failed(e.to_string()),
        Ok(body) => Outcome::Label(body.prediction),
    }
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let sepal_length = RwSignal::new(5.8);
    let sepal_width = RwSignal::new(3.0);
    let petal_length = RwSignal::new(4.4);
    let petal_width = RwSignal::new(1.3);
    let outcome = RwSignal::new(None::<Outcome>);
    let pending = RwSignal::new(false);

    let on_predict = move |_| {
        let req = PredictRequest {
            sepal_length: sepal_length.get(),
            sepal_width: sepal_width.get(),
            petal_length: petal_length.get(),
            petal_width: petal_width.get(),
        };
        pending.set(true);
        leptos::task::spawn_local(async move {
            outcome.set(Some(fetch(req).await));
            pending.set(false);
        });
    };

    view! {
        <Title text="Iris Flower Classifier"/>
        <main>
            <h1>"Iris Flower Classifier"</h1>
            <p>"Enter sepal and petal measurements to predict the iris species."</p>
            <p class="config">"API: " <code>{base_url()}</code></p>
            <Slider label="Sepal length (cm)" min=4.0 max=8.0 value=sepal_length/>
            <Slider label="Sepal width (cm)" min=2.0 max=4.5 value=sepal_width/>
            <Slider label="Petal length (cm)" min=1.0 max=7.0 value=petal_length/>
            <Slider label="Petal width (cm)" min=0.1 max=2.5 value=petal_width/>
            <button on:click=on_predict prop:disabled=move || pending.get()>
                "Predict"
            </button>
            {move || outcome.get().map(|outcome| match outcome {
                Outcome::Label(label) => view! {
                    <p class="success">"Predicted species: " {capitalize(&label)}</p>
                }
                .into_any(),
                Outcome::Unreachable => view! {
                    <p class="error">
                        "Cannot reach service at " <code>{base_url()}</code>
                        ". Check that the API is running."
                    </p>
                }
                .into_any(),
                Outcome::Failed(why) => view! {
                    <p class="error">"Request failed: " {why}</p>
                }
                .into_any(),
            })}
        </main>
    }
}

/// A labeled range input with live value readout.
#[component]
fn Slider(label: &'static str, min: f64, max: f64, value: RwSignal<f64>) -> impl IntoView {
    view! {
        <label class="slider">
            <span>{label} ": " {move || format!("{:.1}", value.get())}</span>
            <input
                type="range"
                min=min
                max=max
                step="0.1"
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Ok(parsed) = event_target_value(&ev).parse() {
                        value.set(parsed);
                    }
                }
            />
        </label>
    }
}
