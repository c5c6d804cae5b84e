//! Then steps for guestbook BDD scenarios.

use super::world::{GuestbookWorld, run_async};
use guestbook::{
    access::Session,
    message::{
        domain::{Message, MessageFields, MessageQuery},
        services::{GuestbookError, GuestbookResult},
    },
};
use rstest_bdd_macros::then;

fn recorded<'a>(
    result: Option<&'a GuestbookResult<Message>>,
    what: &str,
) -> Result<&'a GuestbookResult<Message>, eyre::Report> {
    result.ok_or_else(|| eyre::eyre!("missing {what} result in scenario world"))
}

#[then("the post succeeds")]
fn the_post_succeeds(world: &GuestbookWorld) -> Result<(), eyre::Report> {
    let result = recorded(world.last_post_result.as_ref(), "post")?;
    match result {
        Ok(message) if message.id().is_some() && message.created_at().is_some() => Ok(()),
        other => Err(eyre::eyre!("expected a persisted message, got {other:?}")),
    }
}

#[then("the post is rejected as invalid")]
fn the_post_is_rejected(world: &GuestbookWorld) -> Result<(), eyre::Report> {
    let result = recorded(world.last_post_result.as_ref(), "post")?;
    if !matches!(result, Err(GuestbookError::Validation(_))) {
        return Err(eyre::eyre!("expected validation error, got {result:?}"));
    }
    Ok(())
}

#[then("the edit succeeds")]
fn the_edit_succeeds(world: &GuestbookWorld) -> Result<(), eyre::Report> {
    let result = recorded(world.last_edit_result.as_ref(), "edit")?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected edit to succeed, got {err}"));
    }
    Ok(())
}

#[then("the edit is rejected as unauthorized")]
fn the_edit_is_rejected(world: &GuestbookWorld) -> Result<(), eyre::Report> {
    let result = recorded(world.last_edit_result.as_ref(), "edit")?;
    if !matches!(result, Err(GuestbookError::Authorization { .. })) {
        return Err(eyre::eyre!("expected authorization error, got {result:?}"));
    }
    Ok(())
}

#[then("listing the guestbook shows {count:usize} messages")]
fn listing_shows(world: &GuestbookWorld, count: usize) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.find(
        &MessageQuery::new(),
        MessageFields::all(),
        &Session::anonymous(),
    ))
    .map_err(|err| eyre::eyre!("find failed: {err}"))?;
    if listed.len() != count {
        return Err(eyre::eyre!(
            "expected {count} messages, found {}",
            listed.len()
        ));
    }
    Ok(())
}

#[then(r#"the newest message reads "{text}""#)]
fn the_newest_message_reads(world: &GuestbookWorld, text: String) -> Result<(), eyre::Report> {
    let listed = run_async(world.service.find(
        &MessageQuery::new().with_limit(1),
        MessageFields::all(),
        &Session::anonymous(),
    ))
    .map_err(|err| eyre::eyre!("find failed: {err}"))?;
    let newest = listed
        .first()
        .and_then(|message| message.text())
        .ok_or_else(|| eyre::eyre!("guestbook is empty"))?;
    if newest != text {
        return Err(eyre::eyre!("expected newest message '{text}', found '{newest}'"));
    }
    Ok(())
}

#[then(r#"the stored message reads "{text}""#)]
fn the_stored_message_reads(world: &GuestbookWorld, text: String) -> Result<(), eyre::Report> {
    let id = world
        .last_posted
        .as_ref()
        .and_then(Message::id)
        .ok_or_else(|| eyre::eyre!("no posted message in scenario world"))?;
    let stored = run_async(world.service.get(id, MessageFields::all(), &Session::anonymous()))
        .map_err(|err| eyre::eyre!("get failed: {err}"))?;
    if stored.text() != Some(text.as_str()) {
        return Err(eyre::eyre!(
            "expected stored text '{text}', found {:?}",
            stored.text()
        ));
    }
    Ok(())
}
