// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{MessengerSnapshot, ProfileSnapshot, ProjectsSnapshot};
use crate::{messenger_snapshot, profile_snapshot, projects_snapshot};
use workroom_domain::{ConversationType, MessageKind, TaskPriority, TaskStatus};

#[test]
fn test_projects_fixture_decodes() {
    let snapshot: ProjectsSnapshot = projects_snapshot().unwrap();

    assert_eq!(snapshot.projects.len(), 2);
    assert_eq!(snapshot.tasks.len(), 8);
    assert_eq!(snapshot.members.len(), 9);
    assert_eq!(snapshot.task_groups.len(), 3);

    let p2 = snapshot.project("p2").unwrap();
    assert_eq!(p2.priority, TaskPriority::High);
    assert_eq!(p2.avatar_preset.as_deref(), Some("preset-2"));
    assert!(snapshot.project("p9").is_none());
}

#[test]
fn test_projects_fixture_task_details() {
    let snapshot: ProjectsSnapshot = projects_snapshot().unwrap();

    let research = &snapshot.tasks[0];
    assert_eq!(research.name, "Research");
    assert_eq!(research.status, TaskStatus::Done);
    assert_eq!(research.attachments.len(), 2);
    assert_eq!(snapshot.tasks_for_project("p1").len(), 8);
    assert!(snapshot.tasks_for_project("p2").is_empty());
}

#[test]
fn test_profile_fixture_decodes() {
    let snapshot: ProfileSnapshot = profile_snapshot().unwrap();

    assert_eq!(snapshot.vacation_days_left, 3);
    assert_eq!(snapshot.request_context().vacation_days_left, 3);
    let ids: Vec<&str> = snapshot
        .vacation_requests
        .iter()
        .map(|request| request.id.as_str())
        .collect();
    assert_eq!(ids, vec!["vr1", "vr2", "vr3"]);
}

#[test]
fn test_messenger_fixture_decodes() {
    let snapshot: MessengerSnapshot = messenger_snapshot().unwrap();

    assert_eq!(snapshot.current_user_id, "me");
    let conversations = snapshot.conversations();
    assert_eq!(conversations.len(), 7);
    assert_eq!(conversations[0].conversation_type, ConversationType::Group);
    assert_eq!(conversations[6].conversation_type, ConversationType::Direct);

    let oscar = snapshot.messages_in("c-oscar");
    assert_eq!(oscar.len(), 4);
    assert_eq!(oscar[3].kind, MessageKind::File);
    assert_eq!(oscar[3].file_meta.as_deref(), Some("10 MB PNG"));
}
