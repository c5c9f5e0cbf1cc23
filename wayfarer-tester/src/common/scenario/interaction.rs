use anyhow::{Result, ensure};
use wayfarer_planner::{ChatAuthor, ChatSession, FeedbackForm, FeedbackOutcome};

use crate::logic::TesterAssets;

pub fn chat_cancel(assets: &TesterAssets, seed: u64) -> Result<()> {
    let cfg = &assets.generator.config().chat;
    let mut session = ChatSession::new(cfg);
    ensure!(session.submit("   ").is_none(), "blank input must be ignored");

    let stale = session.submit(&format!("What should I pack? ({seed})"));
    let Some(stale) = stale else {
        anyhow::bail!("message should be accepted");
    };
    session.cancel_pending();
    ensure!(!session.deliver(stale), "cancelled reply must not land");
    ensure!(session.messages().len() == 1, "only the user message remains");

    let Some(live) = session.submit("Best time to visit?") else {
        anyhow::bail!("second message should be accepted");
    };
    ensure!(session.deliver(live), "live reply should land");
    ensure!(!session.deliver(live), "a reply lands only once");
    let last = session.messages().last();
    ensure!(
        last.is_some_and(|m| m.author == ChatAuthor::Assistant && m.text == cfg.canned_reply),
        "assistant reply should be the canned text"
    );
    Ok(())
}

pub fn feedback_flow(_assets: &TesterAssets, seed: u64) -> Result<()> {
    let mut form = FeedbackForm::default();
    ensure!(!form.is_rated(), "new form starts unrated");
    ensure!(form.submit() == FeedbackOutcome::ReturnToDashboard, "unrated submit still returns");

    let stars = u8::try_from(seed % 9).unwrap_or(0);
    form.set_rating(stars);
    ensure!((1..=5).contains(&form.rating), "rating {} not clamped", form.rating);
    form.set_comment("Lovely houseboat");
    ensure!(form.submit() == FeedbackOutcome::ReturnToDashboard, "submit returns to dashboard");
    ensure!(form.cancel() == FeedbackOutcome::ReturnToDashboard, "cancel returns to dashboard");
    Ok(())
}
