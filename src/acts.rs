//! Act list helpers: search filtering and picking an act from free text.

/// Acts whose name contains `term`, case-insensitively, in list order.
///
/// A blank term keeps every act.
pub fn filter_acts<'a>(acts: &'a [String], term: &str) -> Vec<&'a str> {
    let needle = term.trim().to_lowercase();
    acts.iter()
        .map(String::as_str)
        .filter(|act| needle.is_empty() || act.to_lowercase().contains(&needle))
        .collect()
}

/// Pick the act a question is about.
///
/// In order:
/// 1. an act whose name equals the query, ignoring case;
/// 2. the longest act name mentioned inside the query (earliest on ties);
/// 3. the only act whose name contains the query.
///
/// Anything else is ambiguous or unmatched and yields `None`.
pub fn select_act<'a>(query: &str, acts: &'a [String]) -> Option<&'a str> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let lowered: Vec<(usize, String)> = acts
        .iter()
        .enumerate()
        .map(|(i, act)| (i, act.to_lowercase()))
        .filter(|(_, act)| !act.is_empty())
        .collect();

    if let Some((i, _)) = lowered.iter().find(|(_, act)| *act == query) {
        return Some(&acts[*i]);
    }

    let mentioned = lowered
        .iter()
        .filter(|(_, act)| query.contains(act.as_str()))
        .fold(None::<(usize, usize)>, |best, (i, act)| match best {
            Some((_, len)) if len >= act.len() => best,
            _ => Some((*i, act.len())),
        });
    if let Some((i, _)) = mentioned {
        return Some(&acts[i]);
    }

    let mut containing = lowered.iter().filter(|(_, act)| act.contains(&query));
    match (containing.next(), containing.next()) {
        (Some((i, _)), None) => Some(&acts[*i]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acts() -> Vec<String> {
        vec![
            "Digital Privacy Act 2024".to_string(),
            "Environmental Protection Bill".to_string(),
            "Healthcare Reform Initiative".to_string(),
            "Privacy Act".to_string(),
        ]
    }

    #[test]
    fn test_filter_acts_case_insensitive() {
        let acts = acts();
        assert_eq!(
            filter_acts(&acts, "PRIVACY"),
            vec!["Digital Privacy Act 2024", "Privacy Act"]
        );
        assert_eq!(filter_acts(&acts, "bill"), vec!["Environmental Protection Bill"]);
        assert!(filter_acts(&acts, "tax").is_empty());
    }

    #[test]
    fn test_filter_acts_blank_term_keeps_all() {
        let acts = acts();
        assert_eq!(filter_acts(&acts, "  ").len(), 4);
    }

    #[test]
    fn test_select_exact_match() {
        let acts = acts();
        assert_eq!(select_act("privacy act", &acts), Some("Privacy Act"));
    }

    #[test]
    fn test_select_longest_mention() {
        let acts = acts();
        assert_eq!(
            select_act(
                "What are the main concerns about the Digital Privacy Act 2024?",
                &acts
            ),
            Some("Digital Privacy Act 2024")
        );
    }

    #[test]
    fn test_select_unique_partial() {
        let acts = acts();
        assert_eq!(select_act("healthcare", &acts), Some("Healthcare Reform Initiative"));
    }

    #[test]
    fn test_select_ambiguous_partial_is_none() {
        let acts = acts();
        assert_eq!(select_act("privacy", &acts), None);
    }

    #[test]
    fn test_select_no_match() {
        let acts = acts();
        assert_eq!(select_act("Which acts are popular?", &acts), None);
        assert_eq!(select_act("", &acts), None);
    }
}
