#[cfg(test)]
mod favorite_state {
    use crestline::models::favorite::FavoriteState;

    #[test]
    fn toggle_alternates_between_the_two_states() {
        let first = FavoriteState::after_toggle(false);
        assert_eq!(first, FavoriteState::Added);

        let second = FavoriteState::after_toggle(first.is_favorited());
        assert_eq!(second, FavoriteState::Removed);

        // two toggles land back where we started
        let third = FavoriteState::after_toggle(second.is_favorited());
        assert_eq!(third, first);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&FavoriteState::Added).unwrap(),
            "\"added\""
        );
        assert_eq!(
            serde_json::to_string(&FavoriteState::Removed).unwrap(),
            "\"removed\""
        );
    }
}
