//! Integration tests for `SqliteStore` against in-memory and on-disk
//! databases.

use chrono::{NaiveDate, NaiveDateTime};
use poc_core::{
  contact::{NewPocContact, PocStatus},
  store::{PocStore, RecordOrder, SortColumn},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn schedule(day: u32, hour: u32) -> NaiveDateTime {
  NaiveDate::from_ymd_opt(2025, 4, day)
    .unwrap()
    .and_hms_opt(hour, 30, 0)
    .unwrap()
}

fn contact(city: &str, institute: &str, status: PocStatus) -> NewPocContact {
  NewPocContact {
    city:             city.into(),
    institute_name:   institute.into(),
    poc_name:         "J. Doe".into(),
    mobile:           "9876543210".into(),
    email:            "jdoe@example.edu".into(),
    status,
    remarks:          "follow up in May".into(),
    meeting_schedule: schedule(10, 14),
  }
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_then_load_returns_exact_fields() {
  let s = store().await;
  let input = contact("Pune", "ABC College", PocStatus::Cold);

  let stored = s.insert(input.clone()).await.unwrap();
  assert!(stored.id > 0);

  let all = s.select_all(RecordOrder::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  let loaded = &all[0];
  assert_eq!(loaded.id, stored.id);
  assert_eq!(loaded.city, "Pune");
  assert_eq!(loaded.institute_name, "ABC College");
  assert_eq!(loaded.poc_name, "J. Doe");
  assert_eq!(loaded.mobile, "9876543210");
  assert_eq!(loaded.email, "jdoe@example.edu");
  assert_eq!(loaded.status, PocStatus::Cold);
  assert_eq!(loaded.remarks, "follow up in May");
  assert_eq!(loaded.meeting_schedule, input.meeting_schedule);
  assert_eq!(loaded.created_at, stored.created_at);
}

#[tokio::test]
async fn ids_are_unique_and_store_assigned() {
  let s = store().await;
  let a = s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();
  let b = s.insert(contact("Pune", "B", PocStatus::Warm)).await.unwrap();
  let c = s.insert(contact("Pune", "C", PocStatus::Active)).await.unwrap();
  assert!(a.id < b.id && b.id < c.id);
}

#[tokio::test]
async fn empty_fields_are_stored_verbatim() {
  let s = store().await;
  let mut input = contact("", "", PocStatus::Closed);
  input.poc_name = String::new();
  input.email = "not-an-email".into();

  s.insert(input).await.unwrap();
  let all = s.select_all(RecordOrder::default()).await.unwrap();
  assert_eq!(all[0].city, "");
  assert_eq!(all[0].poc_name, "");
  assert_eq!(all[0].email, "not-an-email");
  assert_eq!(all[0].status, PocStatus::Closed);
}

// ─── Select ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_store_selects_nothing() {
  let s = store().await;
  assert!(s.select_all(RecordOrder::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn default_order_is_newest_id_first() {
  let s = store().await;
  for city in ["Pune", "Nagpur", "Mumbai"] {
    s.insert(contact(city, "X", PocStatus::Cold)).await.unwrap();
  }

  let all = s.select_all(RecordOrder::default()).await.unwrap();
  let cities: Vec<_> = all.iter().map(|r| r.city.as_str()).collect();
  assert_eq!(cities, ["Mumbai", "Nagpur", "Pune"]);

  let asc = s
    .select_all(RecordOrder { by: SortColumn::Id, descending: false })
    .await
    .unwrap();
  let cities: Vec<_> = asc.iter().map(|r| r.city.as_str()).collect();
  assert_eq!(cities, ["Pune", "Nagpur", "Mumbai"]);
}

#[tokio::test]
async fn created_at_order_breaks_ties_by_id() {
  let s = store().await;
  let a = s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();
  let b = s.insert(contact("Pune", "B", PocStatus::Cold)).await.unwrap();

  let all = s
    .select_all(RecordOrder { by: SortColumn::CreatedAt, descending: true })
    .await
    .unwrap();
  assert_eq!(all[0].id, b.id);
  assert_eq!(all[1].id, a.id);
}

#[tokio::test]
async fn space_separated_schedule_is_readable() {
  let s = store().await;
  s.conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO poc_contacts (city, meeting_schedule, created_at)
         VALUES ('Pune', '2024-05-01 10:30:00', '2024-04-01T00:00:00+00:00')",
        [],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  let all = s.select_all(RecordOrder::default()).await.unwrap();
  assert_eq!(
    all[0].meeting_schedule,
    NaiveDate::from_ymd_opt(2024, 5, 1).unwrap().and_hms_opt(10, 30, 0).unwrap()
  );
  assert_eq!(all[0].status, PocStatus::Cold);
}

#[tokio::test]
async fn corrupt_status_fails_the_load() {
  let s = store().await;
  s.conn
    .call(|conn| {
      conn.execute(
        "INSERT INTO poc_contacts (status, meeting_schedule, created_at)
         VALUES ('Lukewarm', '2024-05-01T10:30:00', '2024-04-01T00:00:00+00:00')",
        [],
      )?;
      Ok(())
    })
    .await
    .unwrap();

  let err = s.select_all(RecordOrder::default()).await.unwrap_err();
  assert!(matches!(err, Error::Core(poc_core::Error::UnknownStatus(_))));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_id_removes_exactly_one() {
  let s = store().await;
  let a = s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();
  let b = s.insert(contact("Nagpur", "B", PocStatus::Warm)).await.unwrap();
  let c = s.insert(contact("Mumbai", "C", PocStatus::Active)).await.unwrap();

  assert_eq!(s.delete_by_id(b.id).await.unwrap(), 1);

  let all = s.select_all(RecordOrder::default()).await.unwrap();
  assert_eq!(all.len(), 2);
  let ids: Vec<_> = all.iter().map(|r| r.id).collect();
  assert_eq!(ids, [c.id, a.id]);
  assert_eq!(all[1].city, "Pune");
}

#[tokio::test]
async fn delete_missing_id_is_a_noop() {
  let s = store().await;
  s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();

  assert_eq!(s.delete_by_id(9999).await.unwrap(), 0);
  assert_eq!(s.select_all(RecordOrder::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn bulk_delete_removes_exactly_the_set() {
  let s = store().await;
  let mut ids = Vec::new();
  for i in 0..5 {
    let r = s
      .insert(contact(&format!("City {i}"), "X", PocStatus::Cold))
      .await
      .unwrap();
    ids.push(r.id);
  }

  let doomed = [ids[0], ids[2], ids[4], 4242];
  assert_eq!(s.delete_by_ids(&doomed).await.unwrap(), 3);

  let left: Vec<_> = s
    .select_all(RecordOrder { by: SortColumn::Id, descending: false })
    .await
    .unwrap()
    .into_iter()
    .map(|r| r.id)
    .collect();
  assert_eq!(left, [ids[1], ids[3]]);
}

#[tokio::test]
async fn bulk_delete_of_empty_set_is_a_noop() {
  let s = store().await;
  s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();
  assert_eq!(s.delete_by_ids(&[]).await.unwrap(), 0);
  assert_eq!(s.select_all(RecordOrder::default()).await.unwrap().len(), 1);
}

// ─── On-disk ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn open_creates_directory_and_reopen_keeps_rows() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("nested").join("poc.db");

  {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(contact("Pune", "ABC College", PocStatus::Cold))
      .await
      .unwrap();
  }
  assert!(path.exists());

  let s = SqliteStore::open(&path).await.unwrap();
  let all = s.select_all(RecordOrder::default()).await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].institute_name, "ABC College");
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
  let dir = tempfile::tempdir().unwrap();
  let s = SqliteStore::open(dir.path().join("poc.db")).await.unwrap();

  let a = s.insert(contact("Pune", "A", PocStatus::Cold)).await.unwrap();
  s.delete_by_id(a.id).await.unwrap();
  let b = s.insert(contact("Pune", "B", PocStatus::Cold)).await.unwrap();
  assert!(b.id > a.id);
}

#[tokio::test]
async fn unopenable_path_is_a_connection_error() {
  let dir = tempfile::tempdir().unwrap();
  // A regular file where the parent directory should be.
  let blocker = dir.path().join("blocker");
  std::fs::write(&blocker, b"not a directory").unwrap();

  let err = SqliteStore::open(blocker.join("poc.db")).await.err().unwrap();
  assert!(matches!(err, Error::Connection { .. }), "{err}");
}

#[tokio::test]
async fn concurrent_inserts_share_one_connection() {
  let s = store().await;
  let mut handles = Vec::new();
  for i in 0..20 {
    let s = s.clone();
    handles.push(tokio::spawn(async move {
      s.insert(contact(&format!("City {i}"), "X", PocStatus::Warm))
        .await
        .unwrap()
        .id
    }));
  }

  let mut ids = Vec::new();
  for h in handles {
    ids.push(h.await.unwrap());
  }
  ids.sort_unstable();
  ids.dedup();
  assert_eq!(ids.len(), 20);
  assert_eq!(s.select_all(RecordOrder::default()).await.unwrap().len(), 20);
}
