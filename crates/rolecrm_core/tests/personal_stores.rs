use rolecrm_core::{
    MemorySessionStorage, NewNotification, NewScheduleEvent, NotePatch, NoteStore,
    NotificationKind, NotificationStore, SchedulePatch, ScheduleStore, StoreError,
};
use uuid::Uuid;

#[test]
fn notes_are_scoped_to_owner_and_pinned_first() {
    let mut store = NoteStore::open(MemorySessionStorage::shared()).unwrap();
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();
    let first = store.add_note(owner, "first", "# Hello").unwrap();
    let second = store.add_note(owner, "second", "body").unwrap();
    store.add_note(other, "foreign", "x").unwrap();

    assert_eq!(first.preview_text.as_deref(), Some("Hello"));

    store.toggle_pin(first.id).unwrap();
    let notes = store.notes_for_user(owner);
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, first.id);
    assert!(notes[0].pinned);
    assert_eq!(notes[1].id, second.id);

    let updated = store
        .update_note(
            second.id,
            NotePatch {
                content: Some("**bold** move".to_string()),
                ..NotePatch::default()
            },
        )
        .unwrap();
    assert_eq!(updated.title, "second");
    assert_eq!(updated.preview_text.as_deref(), Some("bold move"));

    store.delete_note(first.id).unwrap();
    assert_eq!(store.notes_for_user(owner).len(), 1);
}

#[test]
fn blank_note_title_is_rejected() {
    let mut store = NoteStore::open(MemorySessionStorage::shared()).unwrap();
    assert!(matches!(
        store.add_note(Uuid::new_v4(), " ", "content"),
        Err(StoreError::Validation(_))
    ));
    assert!(store.notes().is_empty());
}

#[test]
fn notifications_track_read_state_per_user() {
    let mut store = NotificationStore::open(MemorySessionStorage::shared()).unwrap();
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();
    let task_id = Uuid::new_v4();
    let first = store
        .push(NewNotification {
            user_id: user,
            title: "Task assigned".to_string(),
            message: "You have a new task".to_string(),
            kind: NotificationKind::Task,
            task_id: Some(task_id),
        })
        .unwrap();
    store
        .push(NewNotification {
            user_id: user,
            title: "Welcome".to_string(),
            ..NewNotification::default()
        })
        .unwrap();
    store
        .push(NewNotification {
            user_id: other,
            title: "Other".to_string(),
            ..NewNotification::default()
        })
        .unwrap();

    assert_eq!(store.unread_count(user), 2);
    store.mark_read(first.id).unwrap();
    assert_eq!(store.unread_count(user), 1);
    assert_eq!(store.unread_for_user(user).len(), 1);

    assert_eq!(store.mark_all_read(user).unwrap(), 1);
    assert_eq!(store.mark_all_read(user).unwrap(), 0);
    assert_eq!(store.unread_count(user), 0);
    assert_eq!(store.unread_count(other), 1);

    assert_eq!(store.clear_for_user(user).unwrap(), 2);
    assert!(store.notifications_for_user(user).is_empty());
    assert_eq!(store.notifications().len(), 1);
}

#[test]
fn schedule_queries_sort_and_window() {
    let mut store = ScheduleStore::open(MemorySessionStorage::shared()).unwrap();
    let user = Uuid::new_v4();
    let late = store
        .add_event(NewScheduleEvent {
            user_id: user,
            title: "review".to_string(),
            start_at: 500,
            end_at: Some(600),
            ..NewScheduleEvent::default()
        })
        .unwrap();
    let early = store
        .add_event(NewScheduleEvent {
            user_id: user,
            title: "standup".to_string(),
            start_at: 100,
            end_at: None,
            ..NewScheduleEvent::default()
        })
        .unwrap();

    let ordered: Vec<_> = store
        .events_for_user(user)
        .into_iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(ordered, vec![early.id, late.id]);

    let window = store.events_between(user, 550, 1_000);
    assert_eq!(window.len(), 1);
    assert_eq!(window[0].id, late.id);
}

#[test]
fn schedule_rejects_reversed_range_on_add_and_update() {
    let mut store = ScheduleStore::open(MemorySessionStorage::shared()).unwrap();
    let user = Uuid::new_v4();
    assert!(matches!(
        store.add_event(NewScheduleEvent {
            user_id: user,
            title: "bad".to_string(),
            start_at: 300,
            end_at: Some(100),
            ..NewScheduleEvent::default()
        }),
        Err(StoreError::Validation(_))
    ));

    let event = store
        .add_event(NewScheduleEvent {
            user_id: user,
            title: "ok".to_string(),
            start_at: 100,
            end_at: Some(200),
            ..NewScheduleEvent::default()
        })
        .unwrap();
    let err = store
        .update_event(
            event.id,
            SchedulePatch {
                end_at: Some(Some(50)),
                ..SchedulePatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.get_event(event.id).unwrap().end_at, Some(200));
}
