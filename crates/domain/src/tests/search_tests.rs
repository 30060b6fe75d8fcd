// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::create_test_conversation;
use crate::{
    ChatMessage, ConversationSummary, MessageKind, Searchable, TeamMember, matches_query, search,
};

fn create_test_conversations() -> Vec<ConversationSummary> {
    vec![
        create_test_conversation("c1", "Medical App Team", "Let's sync at noon"),
        create_test_conversation("c2", "Food Delivery Service", "Mockups uploaded"),
        create_test_conversation("c3", "Garrett Watson", "See you tomorrow"),
    ]
}

#[test]
fn test_blank_query_matches_everything() {
    let conversations: Vec<ConversationSummary> = create_test_conversations();

    assert_eq!(search(&conversations, ""), conversations);
    assert_eq!(search(&conversations, "   "), conversations);
}

#[test]
fn test_query_matches_title_or_preview_ignoring_case() {
    let conversations: Vec<ConversationSummary> = create_test_conversations();

    let by_title: Vec<ConversationSummary> = search(&conversations, "  MEDICAL ");
    let by_preview: Vec<ConversationSummary> = search(&conversations, "mockups");

    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, "c1");
    assert_eq!(by_preview[0].id, "c2");
    assert!(search(&conversations, "invoice").is_empty());
}

#[test]
fn test_chat_message_search_text_joins_optional_parts() {
    let message: ChatMessage = ChatMessage {
        id: String::from("msg-1"),
        conversation_id: String::from("c1"),
        sender_id: String::from("m1"),
        time_label: String::from("9:41 AM"),
        kind: MessageKind::File,
        text: None,
        file_name: Some(String::from("Wireframes.fig")),
        file_meta: Some(String::from("2.4 MB")),
        link_label: None,
    };

    assert_eq!(message.search_text(), " Wireframes.fig 2.4 MB ");
    assert!(matches_query(&message, "wireframes"));
    assert!(matches_query(&message, "2.4 mb"));
    assert!(!matches_query(&message, "figma.com"));
}

#[test]
fn test_team_member_search_by_name() {
    let members: Vec<TeamMember> = vec![
        TeamMember {
            id: String::from("m1"),
            name: String::from("Oscar Holloway"),
            avatar_color: String::from("#F4B400"),
        },
        TeamMember {
            id: String::from("m2"),
            name: String::from("Leonard Rodriguez"),
            avatar_color: String::from("#3F8CFF"),
        },
    ];

    let found: Vec<TeamMember> = search(&members, "rod");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "m2");
}
