// bases/download_cli/src/prompt.rs
use color_eyre::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use download_request::{
    looks_like_spotify_url, ContentType, Parallelism, Selection, SPOTIFY_URL_PREFIX,
};

/// Ask what to download. Invalid answers re-prompt; the numeric choices
/// mirror the menu text (1=track, 2=playlist, 3=album, 4=exit).
pub fn menu_selection() -> Result<Selection> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("What do you want to download? (1 = track, 2 = playlist, 3 = album, 4 = exit)")
        .validate_with(|input: &String| {
            Selection::from_menu_answer(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(Selection::from_menu_answer(&answer)?)
}

/// Ask for the URL, re-prompting until it carries the Spotify prefix.
pub fn spotify_url(content_type: ContentType) -> Result<String> {
    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Enter the Spotify {content_type} URL"))
        .validate_with(|input: &String| {
            if looks_like_spotify_url(input) {
                Ok(())
            } else {
                Err(format!("the URL must start with {SPOTIFY_URL_PREFIX}"))
            }
        })
        .interact_text()?;

    Ok(url.trim().to_string())
}

/// Ask for the worker count for multi-item downloads. Empty or
/// non-numeric answers fall back to the default; large values are clamped
/// silently.
pub fn worker_count() -> Result<Parallelism> {
    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!(
            "Number of parallel downloads (default {})",
            Parallelism::DEFAULT
        ))
        .allow_empty(true)
        .interact_text()?;

    Ok(Parallelism::from_input(&answer))
}
