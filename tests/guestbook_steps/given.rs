//! Given steps for guestbook BDD scenarios.

use super::world::{GuestbookWorld, build_service, run_async};
use eyre::WrapErr;
use guestbook::{access::AdminSecret, access::Session, message::domain::Message};
use rstest_bdd_macros::given;

#[given(r#"a guestbook with admin secret "{secret}""#)]
fn a_guestbook_with_admin_secret(
    world: &mut GuestbookWorld,
    secret: String,
) -> Result<(), eyre::Report> {
    let admin_secret = AdminSecret::new(secret).wrap_err("configure admin secret")?;
    world.service = build_service(Some(admin_secret));
    Ok(())
}

#[given(r#"a visitor has posted "{text}""#)]
fn a_visitor_has_posted(world: &mut GuestbookWorld, text: String) -> Result<(), eyre::Report> {
    let posted = run_async(
        world
            .service
            .save(&Message::new(text), &Session::anonymous()),
    )
    .wrap_err("post message for scenario")?;
    world.last_posted = Some(posted);
    Ok(())
}
