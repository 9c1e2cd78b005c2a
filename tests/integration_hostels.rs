mod common;

use common::{ScriptedInteraction, maple, room_draft, spawn_backend};
use hostel_admin::modules::hostels::HostelScreen;
use hostel_admin::modules::resource::Outcome;
use hostel_models::{HostelDraft, HostelType};

#[tokio::test]
async fn test_new_hostel_listed_with_zero_occupancy() {
    let server = spawn_backend().await;
    let mut screen = HostelScreen::new(server.client().hostels());
    screen.mount().await;

    let ui = ScriptedInteraction::confirming();
    screen.toggle_form();
    *screen.draft_mut() = maple();
    assert_eq!(screen.submit(&ui).await, Outcome::Applied);

    let hostel = &screen.items()[0];
    assert_eq!(hostel.name, "Maple");
    assert_eq!(hostel.hostel_type, HostelType::Boys);
    assert_eq!(hostel.total_rooms, 2);
    assert_eq!(hostel.total_capacity, 4);
    assert_eq!(hostel.occupied_capacity, 0);
    assert_eq!(hostel.available_capacity, 4);
    assert_eq!(hostel.warden, None);
    assert_eq!(ui.messages(), vec!["Hostel created successfully!"]);
}

#[tokio::test]
async fn test_duplicate_hostel_name_is_reported() {
    let server = spawn_backend().await;
    let api = server.client().hostels();
    api.create(&maple()).await.unwrap();

    let mut screen = HostelScreen::new(api);
    screen.mount().await;
    screen.toggle_form();
    *screen.draft_mut() = maple();
    let ui = ScriptedInteraction::confirming();

    assert_eq!(screen.submit(&ui).await, Outcome::Failed);
    assert_eq!(screen.items().len(), 1);
    assert_eq!(screen.draft(), &maple());
    assert_eq!(ui.messages(), vec!["Error: Hostel Maple already exists"]);
}

#[tokio::test]
async fn test_lookup_by_type() {
    let server = spawn_backend().await;
    let api = server.client().hostels();
    api.create(&maple()).await.unwrap();
    api.create(&HostelDraft {
        name: "Cedar".to_string(),
        hostel_type: HostelType::Girls,
        ..maple()
    })
    .await
    .unwrap();

    let girls = api.get_by_type(HostelType::Girls).await.unwrap();
    assert_eq!(girls.len(), 1);
    assert_eq!(girls[0].name, "Cedar");
    assert_eq!(
        server.backend.requests().last().map(String::as_str),
        Some("GET /api/hostels/type/Girls")
    );
}

#[tokio::test]
async fn test_occupancy_follows_allocations() {
    let server = spawn_backend().await;
    let client = server.client();
    let hostel = client.hostels().create(&maple()).await.unwrap();
    let room = client
        .rooms()
        .create(&room_draft(hostel.id, "101", 2))
        .await
        .unwrap();
    let student = client
        .students()
        .create(&common::student_draft("Ada Obi", "CS-001"))
        .await
        .unwrap();
    client
        .allocations()
        .allocate(student.id, room.id)
        .await
        .unwrap();

    let hostel = client.hostels().get_by_id(hostel.id).await.unwrap();
    assert_eq!(hostel.occupied_capacity, 1);
    assert_eq!(hostel.available_capacity, 3);
}
