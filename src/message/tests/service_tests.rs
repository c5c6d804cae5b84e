//! Unit tests for guestbook service orchestration.

use std::collections::HashSet;
use std::sync::Arc;

use crate::access::{AccessPolicy, AdminSecret, Role, Session, SharedSecretPolicy};
use crate::message::{
    adapters::memory::InMemoryMessageStore,
    domain::{Message, MessageDomainError, MessageFields, MessageId, MessageQuery},
    services::{GuestbookError, GuestbookService},
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

const ADMIN: &str = "open sesame";

type TestService = GuestbookService<InMemoryMessageStore, SharedSecretPolicy, DefaultClock>;

#[fixture]
fn service() -> TestService {
    GuestbookService::new(
        Arc::new(InMemoryMessageStore::new()),
        Arc::new(SharedSecretPolicy::new(Some(
            AdminSecret::new(ADMIN).expect("valid secret"),
        ))),
        Arc::new(DefaultClock),
    )
}

fn admin() -> Session {
    Session::with_secret(ADMIN)
}

async fn create(service: &TestService, text: &str) -> Message {
    service
        .save(&Message::new(text), &Session::anonymous())
        .await
        .expect("creating a message should succeed")
}

#[rstest]
#[case(1)]
#[case(300)]
#[tokio::test(flavor = "multi_thread")]
async fn saving_valid_new_message_assigns_identity(service: TestService, #[case] length: usize) {
    let started = Utc::now();

    let saved = create(&service, &"g".repeat(length)).await;

    assert!(saved.id().is_some());
    let created_at = saved.created_at().expect("timestamp assigned");
    assert!(created_at >= started);
}

#[rstest]
#[case(0)]
#[case(301)]
#[tokio::test(flavor = "multi_thread")]
async fn saving_invalid_text_fails_without_persisting(service: TestService, #[case] length: usize) {
    let result = service
        .save(&Message::new("g".repeat(length)), &Session::anonymous())
        .await;

    assert!(matches!(result, Err(GuestbookError::Validation(_))));
    let listed = service
        .find(&MessageQuery::new(), MessageFields::all(), &Session::anonymous())
        .await
        .expect("find");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ids_are_never_reused(service: TestService) {
    let mut ids = HashSet::new();
    for n in 0..20 {
        let saved = create(&service, &format!("message {n}")).await;
        assert!(ids.insert(saved.id().expect("id assigned")));
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_save_without_secret_is_denied(service: TestService) {
    let mut saved = create(&service, "first draft").await;
    saved.set_text("sneaky edit");

    let result = service.save(&saved, &Session::with_secret("guess")).await;

    assert!(matches!(
        result,
        Err(GuestbookError::Authorization { operation: "save" })
    ));
    let id = saved.id().expect("id assigned");
    let stored = service
        .get(id, MessageFields::all(), &Session::anonymous())
        .await
        .expect("get");
    assert_eq!(stored.text(), Some("first draft"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_can_edit_any_existing_message(service: TestService) {
    let saved = create(&service, "typo").await;
    let id = saved.id().expect("id assigned");

    let edited = service
        .save(&Message::existing(id, "fixed"), &admin())
        .await
        .expect("admin edit");

    assert_eq!(edited.id(), Some(id));
    assert_eq!(edited.text(), "fixed");
    assert_eq!(edited.created_at(), saved.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_edit_still_validates_text(service: TestService) {
    let saved = create(&service, "fine").await;
    let id = saved.id().expect("id assigned");

    let result = service.save(&Message::existing(id, ""), &admin()).await;

    assert!(matches!(
        result,
        Err(GuestbookError::Validation(MessageDomainError::EmptyText))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn authorization_is_checked_before_validation(service: TestService) {
    let result = service
        .save(&Message::existing(MessageId::new(), ""), &Session::anonymous())
        .await;

    assert!(matches!(result, Err(GuestbookError::Authorization { .. })));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admin_edit_of_unknown_message_is_not_found(service: TestService) {
    let id = MessageId::new();
    let result = service.save(&Message::existing(id, "hello"), &admin()).await;
    assert!(matches!(result, Err(GuestbookError::NotFound(missing)) if missing == id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_returns_at_most_limit_newest_first(service: TestService) {
    for n in 0..35 {
        create(&service, &format!("message {n}")).await;
    }

    let listed = service
        .find(&MessageQuery::new(), MessageFields::all(), &Session::anonymous())
        .await
        .expect("find");

    assert_eq!(listed.len(), 30);
    let times: Vec<_> = listed
        .iter()
        .map(|message| message.created_at().expect("projected"))
        .collect();
    assert!(times.windows(2).all(|pair| matches!(pair, [newer, older] if newer >= older)));
    assert_eq!(
        listed.first().and_then(|message| message.text()),
        Some("message 34")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_of_unknown_id_is_not_found(service: TestService) {
    create(&service, "something").await;
    let id = MessageId::new();

    let result = service
        .get(id, MessageFields::all(), &Session::anonymous())
        .await;

    assert!(matches!(result, Err(GuestbookError::NotFound(missing)) if missing == id));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_get_returns_identical_values(service: TestService) {
    let saved = create(&service, "stable").await;
    let id = saved.id().expect("id assigned");

    let first = service
        .get(id, MessageFields::all(), &Session::anonymous())
        .await
        .expect("get");
    let second = service
        .get(id, MessageFields::all(), &Session::anonymous())
        .await
        .expect("get");

    assert_eq!(first, second);
}

// ── Policy and clock seams ─────────────────────────────────────────

mockall::mock! {
    Policy {}

    impl AccessPolicy for Policy {
        fn can_create(&self, candidate: &Message) -> bool;
        fn is_admin(&self, session: &Session) -> bool;
        fn can_save(&self, message: &Message, session: &Session) -> bool;
        fn can_find(&self, session: &Session) -> bool;
        fn can_load(&self, session: &Session) -> bool;
        fn roles(&self, message: &Message, session: &Session) -> Vec<Role>;
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 29, 9, 30, 0)
        .single()
        .expect("valid time")
}

fn mocked_service(
    policy: MockPolicy,
) -> GuestbookService<InMemoryMessageStore, MockPolicy, FixedClock> {
    GuestbookService::new(
        Arc::new(InMemoryMessageStore::new()),
        Arc::new(policy),
        Arc::new(FixedClock(fixed_time())),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_consults_policy_and_stamps_clock_time() {
    let mut policy = MockPolicy::new();
    policy.expect_can_save().times(1).return_const(true);
    policy
        .expect_roles()
        .times(1)
        .returning(|_, _| vec![Role::Creator]);
    let service = mocked_service(policy);

    let saved = service
        .save(&Message::new("hello"), &Session::anonymous())
        .await
        .expect("save");

    assert_eq!(saved.created_at(), Some(fixed_time()));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_find_is_an_authorization_error() {
    let mut policy = MockPolicy::new();
    policy.expect_can_find().times(1).return_const(false);
    let service = mocked_service(policy);

    let result = service
        .find(&MessageQuery::new(), MessageFields::all(), &Session::anonymous())
        .await;

    assert!(matches!(
        result,
        Err(GuestbookError::Authorization { operation: "find" })
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn denied_load_is_an_authorization_error() {
    let mut policy = MockPolicy::new();
    policy.expect_can_load().times(1).return_const(false);
    let service = mocked_service(policy);

    let result = service
        .get(MessageId::new(), MessageFields::all(), &Session::anonymous())
        .await;

    assert!(matches!(
        result,
        Err(GuestbookError::Authorization { operation: "load" })
    ));
}
