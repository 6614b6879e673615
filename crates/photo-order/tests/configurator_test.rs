use photo_order::config::{WidgetConfig, MAX_FILE_SIZE};
use photo_order::dispatch::{UiEffect, UiEvent};
use photo_order::lifecycle::ConfiguratorSystem;
use photo_order::model::{
    Card, Catalog, FileDescriptor, Focus, FormField, FormSnapshot, Notice, NoticeKind,
    OptionLines, OrderKind, Summary,
};
use photo_order::submission::{SubmitControl, SUBMITTING_LABEL, SUCCESS_MESSAGE};
use photo_order::upload::BATCH_WARNING;
use std::time::Duration;

fn system() -> ConfiguratorSystem {
    ConfiguratorSystem::new(Catalog::default(), WidgetConfig::default())
}

fn notices(effects: &[UiEffect]) -> Vec<&Notice> {
    effects
        .iter()
        .filter_map(|e| match e {
            UiEffect::Notify(n) => Some(n),
            _ => None,
        })
        .collect()
}

fn submit_control(effects: &[UiEffect]) -> Option<&SubmitControl> {
    effects.iter().rev().find_map(|e| match e {
        UiEffect::SetSubmitControl(c) => Some(c),
        _ => None,
    })
}

#[tokio::test]
async fn test_heritage_order_end_to_end() {
    let system = system();
    let mut page = system.open_page().await.unwrap();

    let pack = system.catalog.pack(&"heritage10".into()).unwrap().clone();
    let rush = system.catalog.option(&"rush".into()).unwrap().clone();
    let print = system.catalog.option(&"print".into()).unwrap().clone();

    let selected = page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    assert!(selected.prevent_default);
    assert_eq!(selected.effects[0], UiEffect::MarkSelected(Card::Pack(pack.id.clone())));
    assert!(selected.effects.contains(&UiEffect::ScrollToForm {
        after: Duration::from_millis(300)
    }));

    let options = page
        .dispatch(UiEvent::OptionsChanged(vec![rush.checked(), print.checked()]))
        .await
        .unwrap();
    let UiEffect::RenderSummary(Summary::Filled(content)) = &options.effects[0] else {
        panic!("Expected a filled summary");
    };
    assert_eq!(content.detail, "Soit 13.90€ TTC / photo");
    assert_eq!(content.options, OptionLines::Items(vec![
        format!("✓ {}", rush.name),
        format!("✓ {}", print.name),
    ]));

    let dropped = page
        .dispatch(UiEvent::Drop(vec![
            FileDescriptor::new("a.jpg", 1024, "image/jpeg"),
            FileDescriptor::new("b.png", MAX_FILE_SIZE, "image/png"),
            FileDescriptor::new("c.tiff", MAX_FILE_SIZE + 1, "image/tiff"),
        ]))
        .await
        .unwrap();
    let warnings = notices(&dropped.effects);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, NoticeKind::Warning);
    assert_eq!(warnings[0].message, BATCH_WARNING);

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert_eq!(snapshot.state.files().len(), 2);
    assert_eq!(
        snapshot.total(),
        pack.price + pack.photos * (rush.per_photo_price + print.per_photo_price)
    );
    assert_eq!(snapshot.total(), 229);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_selection_is_mutually_exclusive() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let session = page.session();

    let service = system.catalog.services[2].clone();
    let pack = system.catalog.packs[1].clone();

    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    page.dispatch(UiEvent::service_card(&service)).await.unwrap();
    let snapshot = system.order_client.snapshot(session).await.unwrap();
    assert_eq!(snapshot.state.kind(), &OrderKind::Solo(service.id.clone()));
    assert!(snapshot.state.selected_pack().is_none());
    assert_eq!(snapshot.state.photo_count(), 1);
    assert_eq!(snapshot.view.selected_card, Some(Card::Service(service.id.clone())));

    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    let snapshot = system.order_client.snapshot(session).await.unwrap();
    assert!(snapshot.state.selected_service().is_none());
    assert_eq!(snapshot.state.photo_count(), pack.photos);
    assert_eq!(snapshot.total(), pack.price);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_options_replaced_not_accumulated() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let famille3 = system.catalog.packs[0].clone();
    let [rush, express, _, cadre] = [0, 1, 2, 3].map(|i| system.catalog.options[i].clone());

    page.dispatch(UiEvent::pack_card(&famille3)).await.unwrap();
    page.dispatch(UiEvent::OptionsChanged(vec![rush.checked(), express.checked()]))
        .await
        .unwrap();
    page.dispatch(UiEvent::OptionsChanged(vec![cadre.checked()]))
        .await
        .unwrap();

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert_eq!(snapshot.state.options(), &[cadre.checked()]);
    assert_eq!(snapshot.total(), 49 + 3 * 15);

    let cleared = page.dispatch(UiEvent::OptionsChanged(Vec::new())).await.unwrap();
    assert!(!cleared.prevent_default);
    let UiEffect::RenderSummary(Summary::Filled(content)) = &cleared.effects[0] else {
        panic!("Expected a filled summary");
    };
    assert_eq!(content.options, OptionLines::Placeholder("Aucune option".to_string()));
    assert_eq!(content.total, "49€ TTC");

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_submit_without_selection_is_blocked() {
    let system = system();
    let mut page = system.open_page().await.unwrap();

    let dispatch = page
        .dispatch(UiEvent::FormSubmitted(FormSnapshot::new("a@b.co")))
        .await
        .unwrap();
    assert!(dispatch.prevent_default);
    let raised = notices(&dispatch.effects);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].message, "Veuillez sélectionner un service ou un pack.");
    assert!(submit_control(&dispatch.effects).unwrap().enabled);

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert!(!snapshot.is_submitting());
    assert!(snapshot.view.submit.enabled);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_blocked_submits_set_focus_and_flags() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let pack = system.catalog.packs[0].clone();
    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();

    let no_files = page
        .dispatch(UiEvent::FormSubmitted(FormSnapshot::new("a@b.co")))
        .await
        .unwrap();
    assert!(no_files.effects.contains(&UiEffect::Focus(Focus::FileInput)));

    page.dispatch(UiEvent::FilesPicked(vec![FileDescriptor::new("a.jpg", 10, "image/jpeg")]))
        .await
        .unwrap();

    let bad_email = page
        .dispatch(UiEvent::FormSubmitted(FormSnapshot::new("not-an-email")))
        .await
        .unwrap();
    assert!(bad_email.effects.contains(&UiEffect::Focus(Focus::EmailField)));
    assert!(bad_email.effects.contains(&UiEffect::ShowEmailError(Some(
        "Veuillez entrer une adresse email valide.".to_string()
    ))));
    assert!(notices(&bad_email.effects).is_empty());

    let missing = page
        .dispatch(UiEvent::FormSubmitted(
            FormSnapshot::new("a@b.co")
                .with_field(FormField::text("name", "").required())
                .with_field(FormField::checkbox("cgv", false).required()),
        ))
        .await
        .unwrap();
    assert!(missing
        .effects
        .contains(&UiEffect::FlagInvalid(vec!["name".to_string(), "cgv".to_string()])));
    assert_eq!(
        notices(&missing.effects)[0].message,
        "Veuillez remplir tous les champs obligatoires."
    );

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_earlier_gates_leave_field_flags_alone() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let pack = system.catalog.packs[0].clone();
    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    page.dispatch(UiEvent::FilesPicked(vec![FileDescriptor::new("a.jpg", 10, "image/jpeg")]))
        .await
        .unwrap();

    page.dispatch(UiEvent::FormSubmitted(
        FormSnapshot::new("a@b.co").with_field(FormField::checkbox("cgv", false).required()),
    ))
    .await
    .unwrap();

    // Only an oversized file this time: the files gate refuses the submit.
    page.dispatch(UiEvent::FilesPicked(vec![FileDescriptor::new(
        "huge.tif",
        MAX_FILE_SIZE + 1,
        "image/tiff",
    )]))
    .await
    .unwrap();
    let no_files = page
        .dispatch(UiEvent::FormSubmitted(FormSnapshot::new("not-an-email")))
        .await
        .unwrap();
    assert!(no_files.effects.contains(&UiEffect::Focus(Focus::FileInput)));
    assert!(!no_files
        .effects
        .iter()
        .any(|e| matches!(e, UiEffect::FlagInvalid(_) | UiEffect::ShowEmailError(_))));

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert_eq!(snapshot.view.invalid_fields, vec!["cgv".to_string()]);
    assert_eq!(snapshot.view.email_error, None);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_live_email_feedback() {
    let system = system();
    let mut page = system.open_page().await.unwrap();

    let typing = page.dispatch(UiEvent::EmailInput("a@".to_string())).await.unwrap();
    assert_eq!(
        typing.effects,
        vec![UiEffect::ShowEmailError(Some(
            "Veuillez entrer une adresse email valide.".to_string()
        ))]
    );
    let valid = page.dispatch(UiEvent::EmailBlur("a@b.co".to_string())).await.unwrap();
    assert_eq!(valid.effects, vec![UiEffect::ShowEmailError(None)]);
    let empty = page.dispatch(UiEvent::EmailInput(String::new())).await.unwrap();
    assert_eq!(empty.effects, vec![UiEffect::ShowEmailError(None)]);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_drag_highlight_is_visual_only() {
    let system = system();
    let mut page = system.open_page().await.unwrap();

    let enter = page.dispatch(UiEvent::DragEnter).await.unwrap();
    assert!(enter.prevent_default);
    assert_eq!(enter.effects, vec![UiEffect::HighlightDropZone(true)]);
    let over = page.dispatch(UiEvent::DragOver).await.unwrap();
    assert!(over.prevent_default);
    assert!(over.effects.is_empty());
    assert!(page.drop_zone().is_highlighted());

    let leave = page.dispatch(UiEvent::DragLeave).await.unwrap();
    assert_eq!(leave.effects, vec![UiEffect::HighlightDropZone(false)]);

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert!(snapshot.state.files().is_empty());
    assert!(snapshot.view.upload.is_none());

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_submission_delay_and_confirmation() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let pack = system.catalog.packs[3].clone();

    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    page.dispatch(UiEvent::FilesPicked(vec![FileDescriptor::new("a.jpg", 10, "image/jpeg")]))
        .await
        .unwrap();

    let started = page
        .dispatch(UiEvent::FormSubmitted(
            FormSnapshot::new("a@b.co").with_field(FormField::checkbox("cgv", true).required()),
        ))
        .await
        .unwrap();
    let control = submit_control(&started.effects).unwrap();
    assert!(!control.enabled);
    assert_eq!(control.label, SUBMITTING_LABEL);
    assert!(notices(&started.effects).is_empty());

    tokio::time::sleep(Duration::from_millis(1400)).await;
    let waiting = page.sync().await.unwrap();
    assert!(notices(&waiting).is_empty());
    assert!(!submit_control(&waiting).unwrap().enabled);

    tokio::time::sleep(Duration::from_millis(200)).await;
    let done = page.sync().await.unwrap();
    let raised = notices(&done);
    assert_eq!(raised.len(), 1);
    assert_eq!(raised[0].kind, NoticeKind::Success);
    assert_eq!(raised[0].message, SUCCESS_MESSAGE);
    assert_eq!(
        submit_control(&done),
        Some(&SubmitControl::idle("Envoyer ma demande"))
    );

    // Notices are reported once, and the session no longer holds them
    assert!(notices(&page.sync().await.unwrap()).is_empty());
    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert!(snapshot.view.notices.is_empty());

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reset_returns_to_empty_order() {
    let system = system();
    let mut page = system.open_page().await.unwrap();
    let pack = system.catalog.packs[0].clone();
    let rush = system.catalog.options[0].clone();

    page.dispatch(UiEvent::pack_card(&pack)).await.unwrap();
    page.dispatch(UiEvent::OptionsChanged(vec![rush.checked()]))
        .await
        .unwrap();

    let reset = page.dispatch(UiEvent::ResetClicked).await.unwrap();
    assert!(reset.effects.contains(&UiEffect::ClearSelection));
    assert!(reset.effects.contains(&UiEffect::RenderSummary(Summary::Empty)));

    let snapshot = system.order_client.snapshot(page.session()).await.unwrap();
    assert!(!snapshot.state.has_selection());
    assert!(snapshot.state.options().is_empty());
    assert_eq!(snapshot.total(), 0);

    drop(page);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sessions_are_independent() {
    let system = system();
    let mut first = system.open_page().await.unwrap();
    let mut second = system.open_page().await.unwrap();
    assert_ne!(first.session(), second.session());

    first
        .dispatch(UiEvent::pack_card(&system.catalog.packs[0].clone()))
        .await
        .unwrap();
    second
        .dispatch(UiEvent::service_card(&system.catalog.services[0].clone()))
        .await
        .unwrap();

    let a = system.order_client.snapshot(first.session()).await.unwrap();
    let b = system.order_client.snapshot(second.session()).await.unwrap();
    assert_eq!(a.total(), 49);
    assert_eq!(b.total(), 19);

    drop(first);
    drop(second);
    system.shutdown().await.unwrap();
}
