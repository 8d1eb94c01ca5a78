use crate::data::{CONVERSATION_STARTERS, SUGGESTED_QUERIES};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::{bold, italic};

pub fn handle() -> AppResult<()> {
    header("Suggested queries");
    for q in SUGGESTED_QUERIES {
        println!("[{}] {}", q.category.as_str(), bold(q.question));
        println!("    {}", italic(q.description));
    }

    println!();
    header("Conversation starters");
    for (i, s) in CONVERSATION_STARTERS.iter().enumerate() {
        println!("{:>2}. {}", i + 1, s);
    }

    if let Some(first) = CONVERSATION_STARTERS.first() {
        println!("\nTry: floatchat chat \"{}\"", first);
    }
    Ok(())
}
