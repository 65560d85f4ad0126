//! Run a handful of sample questions through the agent and print the
//! serialized answers.
//!
//! ```sh
//! cargo run -p frontdesk-agent --example ask
//! ```

use frontdesk_agent::FrontDeskAgent;
use frontdesk_core::Language;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let agent = FrontDeskAgent::with_defaults();

    let questions = [
        ("What are the OPD timings?", Language::English),
        ("mujhe dr khan se milna hai", Language::Hindi),
        ("Which departments do you have?", Language::Marathi),
        ("How do I cancel my appointment?", Language::English),
        ("is there a canteen?", Language::English),
    ];

    for (question, language) in questions {
        let result = agent.answer(question, language).await;
        let json = serde_json::to_string_pretty(&result).unwrap_or_default();
        println!("Q [{language}]: {question}\n{json}\n");
    }
}
