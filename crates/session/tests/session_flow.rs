//! End-to-end session flow: grid entry, list view, edit and delete dialogs.

use entrygrid_core::{Entity, ValidationReason};
use entrygrid_products::{DiscountBound, EntryField, ImageRef, ImageRule};
use entrygrid_session::{EntrySession, Modal, Route, SessionConfig};
use entrygrid_store::EntryStore;

const ROW: [&str; 5] = ["Electronics", "Male", "25", "199.99", "15"];

fn session(config: SessionConfig) -> EntrySession {
    entrygrid_observability::init_with_default("debug");
    EntrySession::new(config)
}

fn fill_grid(session: &mut EntrySession, rows: usize) {
    for row in 0..rows {
        assert!(session.add_row(), "row {row} should be addable");
        for (field, value) in EntryField::ALL.into_iter().zip(ROW) {
            session.set_field(row, field, value);
        }
    }
}

#[test]
fn full_grid_lands_in_list_view() {
    let mut session = session(SessionConfig::default());
    fill_grid(&mut session, 5);
    assert!(!session.can_add_row());

    let ids = session.submit_grid().unwrap();
    assert_eq!(ids.len(), 5);
    assert_eq!(session.route(), Route::List);

    let rows = session.list_rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4].serial, 5);
    assert_eq!(rows[0].category, "Electronics");
    assert_eq!(rows[0].discount, "15");
    assert!(session.grid().rows().is_empty());
}

#[test]
fn invalid_row_rejects_whole_batch() {
    let mut session = session(SessionConfig::default());
    fill_grid(&mut session, 5);
    session.set_field(2, EntryField::Discount, "150");

    let err = session.submit_grid().unwrap_err();
    let validation = err.as_validation().unwrap();
    assert_eq!(validation.reason, ValidationReason::DiscountOutOfRange);
    assert_eq!(validation.row, Some(2));
    assert_eq!(session.store().len(), 0);
    assert_eq!(session.route(), Route::Create);
    assert_eq!(session.grid().rows().len(), 5);
}

#[test]
fn edit_then_delete_from_list() {
    let mut session = session(SessionConfig::default());
    fill_grid(&mut session, 2);
    let ids = session.submit_grid().unwrap();

    assert!(session.edit(ids[0]));
    session.edit_field(EntryField::Price, "149.5");
    session.submit_edit().unwrap();
    assert_eq!(session.modal(), &Modal::Closed);

    let edited = session.store().get(ids[0]).unwrap();
    assert_eq!(edited.price(), 149.5);
    assert_eq!(edited.gender(), "Male");
    assert_eq!(edited.age(), Some(25));

    assert!(session.request_delete(ids[1]));
    assert!(session.confirm_delete());
    let remaining: Vec<_> = session.store().list().iter().map(|e| *e.id()).collect();
    assert_eq!(remaining, vec![ids[0]]);
}

#[test]
fn configured_rules_apply_to_grid_and_edits() {
    let config = SessionConfig::from_json_str(r#"{"rules":{"discount":"exclusive"}}"#).unwrap();
    let mut session = session(config);
    fill_grid(&mut session, 1);
    session.set_field(0, EntryField::Discount, "100");
    assert!(session.submit_grid().is_err());

    session.set_field(0, EntryField::Discount, "99");
    let ids = session.submit_grid().unwrap();

    session.edit(ids[0]);
    session.edit_field(EntryField::Discount, "100");
    let err = session.submit_edit().unwrap_err();
    assert_eq!(
        err.as_validation().map(|v| v.message.as_str()),
        Some("Discount must be > 0 and < 100.")
    );
    assert!(matches!(session.modal(), Modal::Edit(_)));
    assert_eq!(session.store().get(ids[0]).unwrap().discount(), 99.0);
    assert_eq!(
        session.store().validator().rules().discount,
        DiscountBound::Exclusive
    );
}

#[tokio::test]
async fn image_upload_variant_requires_an_image() {
    let config = SessionConfig {
        rules: entrygrid_products::RuleSet::default().with_image(ImageRule::Required),
        ..SessionConfig::default()
    };
    let mut session = session(config);
    fill_grid(&mut session, 1);

    let err = session.submit_grid().unwrap_err();
    assert_eq!(
        err.as_validation().map(|v| v.message.as_str()),
        Some("Please fill all fields and upload an image in every row before submitting!")
    );

    let path = std::env::temp_dir().join(format!("entrygrid-flow-{}.png", entrygrid_core::EntryId::new()));
    std::fs::write(&path, [1u8, 2, 3]).unwrap();
    let url = session.upload_image(0, &path).await.unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(url.as_deref(), Some("data:image/png;base64,AQID"));

    let ids = session.submit_grid().unwrap();
    let stored = session.store().get(ids[0]).unwrap();
    assert_eq!(stored.image().map(ImageRef::len), Some(3));
}

#[test]
fn unknown_route_redirects_to_create() {
    let mut session = session(SessionConfig::default());
    assert_eq!(session.navigate("/details"), Route::List);
    assert_eq!(session.navigate("/admin"), Route::Create);
}
