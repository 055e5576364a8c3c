//! Builds the message array a code-review assistant would send to a
//! chat-completion endpoint and prints it as JSON. No request is made.

use chat_object::{
    Chat, Prompt, Role, TemplateVariables, chat, msg_assistant, msg_system, msg_user, msgs, prmt,
    utils::log::Logger,
};

struct CodeReviewAssistant {
    system_prompt: Prompt,
    chat: Chat,
}

impl CodeReviewAssistant {
    fn new() -> Self {
        let system_prompt = prmt(["
            You are an expert code reviewer and Rust developer.

            Your role is to:
            1. Review code for best practices, bugs, and improvements
            2. Suggest optimizations and better patterns
            3. Explain your reasoning clearly

            Always be constructive and educational in your feedback.
        "]);

        let mut assistant = Self {
            system_prompt,
            chat: Chat::default(),
        };
        assistant.reset();
        assistant
    }

    fn reset(&mut self) {
        self.chat.clear();
        self.chat.add_message(msg_system(self.system_prompt.clone()));
    }

    fn review_code(&mut self, code: &str, context: Option<&str>) -> String {
        let mut request = prmt(["
            Please review this code:
        "]);
        request += "\n\n";
        request += code.trim();
        if let Some(context) = context {
            request += format!("\n\nContext: {context}");
        }

        self.chat.add_message(msg_user(request));

        // stand-in for the provider call
        let reply = format!("Reviewed {} lines.", code.trim().lines().count());
        self.chat.add_message(msg_assistant(reply.as_str()));
        reply
    }
}

fn main() -> anyhow::Result<()> {
    Logger::init(None);

    let mut assistant = CodeReviewAssistant::new();
    let review = assistant.review_code(
        "
fn fib(n: u64) -> u64 {
    if n <= 1 { n } else { fib(n - 1) + fib(n - 2) }
}
",
        Some("This is a recursive Fibonacci implementation"),
    );
    log::info!("{review}");

    println!("{}", assistant.chat.to_json_pretty()?);
    println!("\n{}", assistant.chat);

    let template = prmt(["
        You are a {{role}} expert.

        Task: {{task}}
    "]);
    let filled = template.fill(
        &TemplateVariables::new()
            .set("role", "Rust security")
            .set("task", "security audit"),
    );
    println!("\n{filled}");

    let demo = chat(msgs([
        (Role::System, "You are a helpful coding assistant."),
        (Role::User, "How do I write a macro in Rust?"),
        (Role::Assistant, "Start with macro_rules!..."),
    ]));
    log::info!(
        "demo chat has {} messages, mentions macros: {}",
        demo.len(),
        demo.contains_text("macro")
    );

    Ok(())
}
