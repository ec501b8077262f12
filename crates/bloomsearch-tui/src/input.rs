// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Single-line text input for the search box.

/// Text plus a cursor measured in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
	content: String,
	cursor: usize,
}

impl InputState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_content(content: impl Into<String>) -> Self {
		let content = content.into();
		let cursor = content.chars().count();
		Self { content, cursor }
	}

	pub fn content(&self) -> &str {
		&self.content
	}

	pub fn cursor(&self) -> usize {
		self.cursor
	}

	pub fn insert_char(&mut self, c: char) {
		let at = self.byte_index();
		self.content.insert(at, c);
		self.cursor += 1;
	}

	/// Deletes the character before the cursor.
	pub fn delete_char(&mut self) -> bool {
		if self.cursor == 0 {
			return false;
		}
		self.cursor -= 1;
		let at = self.byte_index();
		self.content.remove(at);
		true
	}

	pub fn move_cursor_left(&mut self) {
		self.cursor = self.cursor.saturating_sub(1);
	}

	pub fn move_cursor_right(&mut self) {
		self.cursor = (self.cursor + 1).min(self.content.chars().count());
	}

	pub fn move_cursor_start(&mut self) {
		self.cursor = 0;
	}

	pub fn move_cursor_end(&mut self) {
		self.cursor = self.content.chars().count();
	}

	pub fn clear(&mut self) {
		self.content.clear();
		self.cursor = 0;
	}

	fn byte_index(&self) -> usize {
		self
			.content
			.char_indices()
			.nth(self.cursor)
			.map(|(i, _)| i)
			.unwrap_or(self.content.len())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_insert_and_delete_multibyte() {
		let mut input = InputState::new();
		for c in "café".chars() {
			input.insert_char(c);
		}
		input.move_cursor_left();
		input.insert_char('x');
		assert_eq!(input.content(), "cafxé");
		assert!(input.delete_char());
		assert_eq!(input.content(), "café");
		assert_eq!(input.cursor(), 3);
	}

	#[test]
	fn test_delete_at_start_is_noop() {
		let mut input = InputState::with_content("shoes");
		input.move_cursor_start();
		assert!(!input.delete_char());
		assert_eq!(input.content(), "shoes");
	}

	#[test]
	fn test_cursor_is_bounded() {
		let mut input = InputState::with_content("ab");
		input.move_cursor_right();
		assert_eq!(input.cursor(), 2);
		input.clear();
		input.move_cursor_left();
		assert_eq!(input.cursor(), 0);
	}
}
