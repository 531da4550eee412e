use notehub::domain::{Note, NoteTag, NotesQuery};

/// Build a note fixture with fixed timestamps
#[allow(dead_code)]
pub fn note(id: i64, title: &str, content: &str, tag: NoteTag) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        tag,
        created_at: "2026-01-02T03:04:05Z".to_string(),
        updated_at: "2026-01-02T03:04:05Z".to_string(),
    }
}

/// A small collection spanning every tag; more than one default page worth
#[allow(dead_code)]
pub fn sample_notes() -> Vec<Note> {
    vec![
        note(1, "Weekly meeting", "Prepare agenda", NoteTag::Meeting),
        note(2, "Groceries", "Buy milk", NoteTag::Shopping),
        note(3, "Standup notes", "Blockers and updates", NoteTag::Work),
        note(4, "Call dentist", "Reschedule appointment", NoteTag::Todo),
        note(5, "Gift ideas", "Books, maybe a plant", NoteTag::Personal),
        note(6, "Quarterly review", "Collect highlights", NoteTag::Work),
        note(7, "Meal plan", "Pasta on Tuesday", NoteTag::Personal),
        note(8, "Team meeting", "Roadmap discussion", NoteTag::Meeting),
        note(9, "Fix leaking tap", "Call the plumber", NoteTag::Todo),
        note(10, "Hardware store", "Screws and a drill bit", NoteTag::Shopping),
        note(11, "Performance notes", "Draft self-review", NoteTag::Work),
        note(12, "Birthday party", "Order the cake", NoteTag::Personal),
        note(13, "Retro meeting", "What went well", NoteTag::Meeting),
        note(14, "Water the plants", "Twice this week", NoteTag::Todo),
    ]
}

/// Query fixture with the default page size
#[allow(dead_code)]
pub fn query(page: u32, search: &str, tag: Option<&str>) -> NotesQuery {
    NotesQuery {
        page,
        search: search.to_string(),
        per_page: 12,
        tag: tag.map(str::to_string),
    }
}
