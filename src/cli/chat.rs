// Interactive chat REPL

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::conversation::ConversationHistory;
use crate::engine::{ReplySource, TurnEngine, TurnOutcome};
use crate::response::Tone;

const HELP: &str = "Commands:\n\
    /tone <id>   switch tone (supportive, professional, casual, youthful, mature)\n\
    /plan        show the resource plan for your last message\n\
    /help        show this help\n\
    /quit        exit";

/// Run the interactive chat loop until EOF or /quit
pub async fn run_chat(engine: TurnEngine, initial_tone: Tone) -> Result<()> {
    let mut editor = DefaultEditor::new()?;
    let mut history = ConversationHistory::new();
    let mut tone = initial_tone;
    let mut last_message: Option<String> = None;

    println!("Liam ({} mode)", tone);
    println!("{}\n", engine.companion().welcome(tone));

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(&line);

                if let Some(command) = line.strip_prefix('/') {
                    if handle_command(command, &engine, &mut tone, last_message.as_deref()) {
                        break;
                    }
                    continue;
                }

                history.add_user_message(line.as_str());
                let TurnOutcome {
                    reply,
                    reply_source,
                    actions,
                    ..
                } = engine.run_turn(&history, &line, tone).await;
                history.add_assistant_message(reply.as_str());
                last_message = Some(line);

                println!("\nliam> {}", reply);
                if reply_source == ReplySource::Crisis {
                    println!("\n  In crisis? Call 1-833-456-4566 for immediate support.");
                }
                for action in &actions {
                    println!("  [{}] {}", action.label, action.url);
                }
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

/// Returns true when the REPL should exit
fn handle_command(
    command: &str,
    engine: &TurnEngine,
    tone: &mut Tone,
    last_message: Option<&str>,
) -> bool {
    let mut parts = command.splitn(2, ' ');
    match parts.next().unwrap_or_default() {
        "quit" | "exit" => return true,
        "help" => println!("{}", HELP),
        "tone" => match parts.next() {
            Some(id) => {
                *tone = Tone::resolve(id);
                println!("Switched to {} mode.", tone);
                println!("{}\n", engine.companion().welcome(*tone));
            }
            None => println!("Current tone: {}", tone),
        },
        "plan" => match last_message {
            Some(message) => {
                let plan = engine.companion().resource_plan(message);
                println!("\n{}\n", plan.summary);
                for (i, advice) in plan.key_advice.iter().enumerate() {
                    println!("  {}. {}", i + 1, advice);
                }
                println!();
                for link in &plan.recommended_links {
                    println!("  {} - {}", link.title, link.url);
                }
                println!();
            }
            None => println!("Send a message first."),
        },
        other => println!("Unknown command: /{} (try /help)", other),
    }
    false
}
