//! Topics answered by `:help <topic>`.

const TOPICS: &[(&str, &str)] = &[
    ("quit", "Type :wq to save and quit, or :q! to quit without saving."),
    (
        "movement",
        "hjkl step one cell. Prefix a count to repeat (3l). 0 $ H L M jump to \
         the edges or the center; f/t<c> and e/w find nearby glyphs; ; repeats \
         the last find.",
    ),
    (
        "turns",
        "Completed commands take a turn. Choosing a register, undo, marks, \
         using items and colon commands are free; :swap is not.",
    ),
    (
        "attack",
        "d followed by a movement attacks every enemy on the way, then moves. \
         With a ranged weapon equipped you stay where you are.",
    ),
    (
        "inventory",
        "Registers 1-9 are equipped, a-z are the pack. Type \"r before y or p \
         to pick the register; i or :reg lists them; :swap x y trades two.",
    ),
    ("grab", "y followed by a movement picks up everything along that path."),
    ("drop", "p drops the last used item; \"rp drops the item in register r."),
    ("use", "@r uses the item in register r."),
    ("marks", "ma remembers this cell as mark a; `a or 'a jumps back to it."),
    ("undo", "u walks back to where you stood before the last command."),
];

const SYNONYMS: &[(&str, &str)] = &[
    ("controls", "movement"),
    ("delete", "attack"),
    ("yank", "grab"),
    ("put", "drop"),
    ("registers", "inventory"),
    ("mark", "marks"),
];

/// Lines to show for `topic`; `None` prints the general hint.
pub fn help_lines(topic: Option<&str>) -> Vec<String> {
    let Some(topic) = topic else {
        return vec!["Use :help <topic> to learn about a feature, e.g. :help movement.".to_owned()];
    };
    let query = if topic.chars().count() > 1 {
        topic.to_lowercase()
    } else {
        topic.to_owned()
    };
    let key = SYNONYMS
        .iter()
        .find(|(alias, _)| *alias == query)
        .map_or(query.as_str(), |(_, target)| *target);
    match TOPICS.iter().find(|(name, _)| *name == key) {
        Some((_, text)) => text.lines().map(str::to_owned).collect(),
        None => vec![format!("Sorry, I can't help with {topic}.")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synonyms_and_case_are_folded() {
        assert_eq!(help_lines(Some("Yank")), help_lines(Some("grab")));
        assert!(help_lines(Some("nonsense"))[0].starts_with("Sorry"));
    }
}
