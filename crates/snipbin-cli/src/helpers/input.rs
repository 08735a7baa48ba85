//! Snippet text input.

use std::io::{self, IsTerminal, Read};

use dialoguer::Editor;

/// Read snippet text from --content, --file, stdin, or $EDITOR.
pub fn read_snippet_text(
    content: Option<String>,
    file: Option<&str>,
    no_input: bool,
) -> anyhow::Result<String> {
    if let Some(value) = content {
        if value.is_empty() {
            return Err(anyhow::anyhow!("--content cannot be empty"));
        }
        return Ok(value);
    }

    if let Some(path) = file {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e))?;
        if text.is_empty() {
            return Err(anyhow::anyhow!("Snippet file is empty: {}", path));
        }
        return Ok(text);
    }

    if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
        if buffer.is_empty() {
            return Err(anyhow::anyhow!("No input provided on stdin"));
        }
        return Ok(buffer);
    }

    if no_input {
        return Err(anyhow::anyhow!(
            "--no-input requires --content, --file, or content on stdin"
        ));
    }

    let text = Editor::new()
        .edit("")
        .map_err(|e| anyhow::anyhow!("Failed to launch editor: {}", e))?
        .ok_or_else(|| anyhow::anyhow!("Editor closed without saving"))?;
    if text.trim().is_empty() {
        return Err(anyhow::anyhow!("Snippet is empty"));
    }
    Ok(text)
}
