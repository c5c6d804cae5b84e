//! When steps for guestbook BDD scenarios.

use super::world::{GuestbookWorld, run_async};
use guestbook::{
    access::Session,
    message::domain::Message,
};
use rstest_bdd_macros::when;

fn post(world: &mut GuestbookWorld, text: String) {
    let result = run_async(
        world
            .service
            .save(&Message::new(text), &Session::anonymous()),
    );
    if let Ok(message) = &result {
        world.last_posted = Some(message.clone());
    }
    world.last_post_result = Some(result);
}

#[when(r#"a visitor posts "{text}""#)]
fn a_visitor_posts(world: &mut GuestbookWorld, text: String) {
    post(world, text);
}

#[when("a visitor posts an empty message")]
fn a_visitor_posts_empty(world: &mut GuestbookWorld) {
    post(world, String::new());
}

#[when(r#"a visitor presenting "{secret}" edits the message to "{text}""#)]
fn a_visitor_edits(
    world: &mut GuestbookWorld,
    secret: String,
    text: String,
) -> Result<(), eyre::Report> {
    let mut edited = world
        .last_posted
        .clone()
        .ok_or_else(|| eyre::eyre!("no posted message in scenario world"))?;
    edited.set_text(text);
    let session = Session::with_secret(secret);
    world.last_edit_result = Some(run_async(world.service.save(&edited, &session)));
    Ok(())
}
