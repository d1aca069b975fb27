use crate::models::PosterText;
use crate::mood::Mood;
use crate::params::GenerationParameters;

pub const POSTER_TEXT: &str = include_str!("../data/prompts/poster_text.txt");
pub const POSTER_IMAGE: &str = include_str!("../data/prompts/poster_image.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Substituted values are copied as-is and never rescanned, so model output
/// containing `{{...}}` survives verbatim. Unknown keys are left in place.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            result.push_str(&rest[start..]);
            return result;
        };

        let key = &after_open[..end];
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => result.push_str(value),
            None => result.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after_open[end + 2..];
    }

    result.push_str(rest);
    result
}

/// Prompt asking the text model for a quote and a scene description.
pub fn poster_text_prompt(mood: Mood, params: &GenerationParameters) -> String {
    let subject_count = params.subject_count.to_string();
    render(
        POSTER_TEXT,
        &[
            ("style", params.art_style),
            ("mood", mood.label()),
            ("subject_count", &subject_count),
            ("texture", params.texture),
            ("location", params.location),
        ],
    )
}

/// Prompt asking the image model to paint the scene with the quote in it.
pub fn poster_image_prompt(
    text: &PosterText,
    params: &GenerationParameters,
    aspect_ratio: &str,
) -> String {
    render(
        POSTER_IMAGE,
        &[
            ("style", params.art_style),
            ("description", &text.visual_description),
            ("quote", &text.quote),
            ("text_style", params.text_style),
            ("texture", params.texture),
            ("location", params.location),
            ("aspect_ratio", aspect_ratio),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_params() -> GenerationParameters {
        GenerationParameters {
            art_style: "Diorama Photography",
            location: "a swamp made of glitter",
            texture: "distressed felt",
            text_style: "written in frosting on a cake",
            subject_count: 2,
        }
    }

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_multiple_vars() {
        assert_eq!(
            render("{{a}} and {{b}}", &[("a", "cats"), ("b", "dogs")]),
            "cats and dogs"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} {{b}}", &[("a", "x")]), "x {{b}}");
    }

    #[test]
    fn test_render_does_not_rescan_substituted_values() {
        assert_eq!(
            render("{{a}} then {{b}}", &[("a", "{{b}}"), ("b", "x")]),
            "{{b}} then x"
        );
    }

    #[test]
    fn test_render_keeps_unclosed_braces() {
        assert_eq!(render("{{a}} and {{oops", &[("a", "x")]), "x and {{oops");
    }

    #[test]
    fn test_image_prompt_keeps_placeholder_text_from_model_output() {
        let text = PosterText {
            quote: "Never say {{location}}".to_string(),
            visual_description: "a possum holding a sign reading {{quote}}".to_string(),
        };
        let prompt = poster_image_prompt(&text, &fixed_params(), "3:4");

        assert!(prompt.contains("Render the text: \"Never say {{location}}\""));
        assert!(prompt.contains("SCENE: a possum holding a sign reading {{quote}}."));
        assert!(prompt.contains("ENVIRONMENT:\na swamp made of glitter."));
    }

    #[test]
    fn test_templates_have_placeholders() {
        for key in ["{{style}}", "{{mood}}", "{{subject_count}}", "{{texture}}", "{{location}}"] {
            assert!(POSTER_TEXT.contains(key), "missing {key}");
        }
        for key in ["{{description}}", "{{quote}}", "{{text_style}}", "{{aspect_ratio}}"] {
            assert!(POSTER_IMAGE.contains(key), "missing {key}");
        }
    }

    #[test]
    fn test_text_prompt_mentions_mood_and_parameters() {
        let prompt = poster_text_prompt(Mood::Sad, &fixed_params());

        assert!(prompt.contains("feeling Sad"));
        assert!(prompt.contains("MAXIMUM 7 WORDS"));
        assert!(prompt.contains("a scene with 2 weird 3D characters"));
        assert!(prompt.contains("Texture focus: distressed felt"));
        assert!(prompt.contains("Setting: a swamp made of glitter"));
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_image_prompt_embeds_quote_verbatim() {
        let text = PosterText {
            quote: "Be the problem".to_string(),
            visual_description: "two felt possums arguing".to_string(),
        };
        let prompt = poster_image_prompt(&text, &fixed_params(), "3:4");

        assert!(prompt.contains("Render the text: \"Be the problem\""));
        assert!(prompt.contains("SCENE: two felt possums arguing."));
        assert!(prompt.contains("Style: written in frosting on a cake"));
        assert!(prompt.contains("spelled correctly"));
        assert!(prompt.contains("Portrait 3:4 aspect ratio"));
        assert!(prompt.contains("Diorama Photography, Lowbrow Art, Weirdcore"));
        assert!(!prompt.contains("{{"));
    }
}
