#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use anyhow::anyhow;

    use crate::app::app::setup_or_restore;

    #[test]
    fn failed_terminal_setup_restores() {
        let restored = Cell::new(false);
        let result: anyhow::Result<()> =
            setup_or_restore(|| Err(anyhow!("no tty")), || restored.set(true));

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn successful_terminal_setup_keeps_state() {
        let restored = Cell::new(false);
        let result = setup_or_restore(|| Ok(42), || restored.set(true));

        assert_eq!(result.unwrap(), 42);
        assert!(!restored.get());
    }
}
