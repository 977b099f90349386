//! Sidebar filtering: name search plus the All / NPCs / Friends tabs

use crate::types::conversation::ConversationSummary;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChatTab {
    #[default]
    All,
    Npcs,
    Friends,
}

impl ChatTab {
    pub const TABS: [ChatTab; 3] = [ChatTab::All, ChatTab::Npcs, ChatTab::Friends];

    pub fn label(&self) -> &'static str {
        match self {
            ChatTab::All => "All",
            ChatTab::Npcs => "NPCs",
            ChatTab::Friends => "Friends",
        }
    }

    fn admits(&self, conversation: &ConversationSummary) -> bool {
        match self {
            ChatTab::All => true,
            ChatTab::Npcs => conversation.is_npc,
            ChatTab::Friends => !conversation.is_npc,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationFilter {
    pub query: String,
    pub tab: ChatTab,
}

impl ConversationFilter {
    pub fn matches(&self, conversation: &ConversationSummary) -> bool {
        let query = self.query.to_lowercase();
        conversation.name.to_lowercase().contains(&query) && self.tab.admits(conversation)
    }

    /// Matching conversations, in list order
    pub fn apply<'a>(&self, conversations: &'a [ConversationSummary]) -> Vec<&'a ConversationSummary> {
        conversations.iter().filter(|c| self.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::demo::demo_conversations;

    fn names<'a>(found: &[&'a ConversationSummary]) -> Vec<&'a str> {
        found.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything() {
        let conversations = demo_conversations();
        let found = ConversationFilter::default().apply(&conversations);
        assert_eq!(found.len(), conversations.len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let conversations = demo_conversations();
        let filter = ConversationFilter {
            query: "'S AI".to_string(),
            tab: ChatTab::All,
        };
        assert_eq!(names(&filter.apply(&conversations)), vec!["Sarah's AI", "Mike's AI"]);
    }

    #[test]
    fn test_tabs() {
        let conversations = demo_conversations();

        let npcs = ConversationFilter {
            tab: ChatTab::Npcs,
            ..Default::default()
        };
        assert_eq!(names(&npcs.apply(&conversations)), vec!["Sarah's AI", "Mike's AI"]);

        let friends = ConversationFilter {
            tab: ChatTab::Friends,
            ..Default::default()
        };
        assert_eq!(names(&friends.apply(&conversations)), vec!["Emma Wilson", "Alex Chen"]);
    }

    #[test]
    fn test_search_and_tab_combine() {
        let conversations = demo_conversations();
        let filter = ConversationFilter {
            query: "a".to_string(),
            tab: ChatTab::Friends,
        };
        assert_eq!(names(&filter.apply(&conversations)), vec!["Emma Wilson", "Alex Chen"]);

        let filter = ConversationFilter {
            query: "mike".to_string(),
            tab: ChatTab::Friends,
        };
        assert!(filter.apply(&conversations).is_empty());
    }
}
