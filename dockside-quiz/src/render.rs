//! HTML rendering for the quiz page and the score fragment
//!
//! Markup is assembled by hand; every piece of bank text goes through
//! [`escape_html`].

use crate::question::QuestionBank;
use crate::score::Score;

const PAGE_TITLE: &str = "Docker Quiz";

const BASE_STYLE: &str = r#"
        body {
            font-family: sans-serif;
            background-color: #f4f4f4;
            margin: 0;
            padding: 20px;
            display: flex;
            justify-content: center;
            align-items: center;
            min-height: 100vh;
        }
        .congrats {
            background-color: #d4edda;
            color: #155724;
            padding: 20px;
            border-radius: 8px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
            text-align: center;
            font-size: 1.5em;
            margin-top: 30px;
        }
"#;

const QUIZ_STYLE: &str = r#"
        .quiz-container {
            background-color: #fff;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
            width: 80%;
            max-width: 600px;
        }
        h1 {
            color: #333;
            text-align: center;
            margin-bottom: 20px;
        }
        .question-container {
            margin-bottom: 20px;
            padding: 15px;
            border: 1px solid #ddd;
            border-radius: 4px;
        }
        .question-container:not(:first-child) {
            display: none;
        }
        p strong {
            color: #007bff;
            font-size: 1.1em;
            display: block;
            margin-bottom: 10px;
        }
        label {
            display: block;
            margin-bottom: 8px;
            color: #555;
        }
        input[type="radio"] {
            margin-right: 8px;
        }
        .controls {
            text-align: center;
            margin-top: 20px;
        }
        button {
            background-color: #007bff;
            color: white;
            padding: 10px 20px;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-size: 1em;
            margin: 0 10px;
        }
        button:hover {
            background-color: #0056b3;
        }
        #submit-button {
            background-color: #28a745;
        }
        .hidden {
            display: none !important;
        }
"#;

// Shows one question at a time; the form still posts every answer at once.
const PAGER_SCRIPT: &str = r#"
        const containers = document.querySelectorAll('.question-container');
        const prevButton = document.getElementById('prev-button');
        const nextButton = document.getElementById('next-button');
        const submitButton = document.getElementById('submit-button');
        const last = containers.length - 1;
        let current = 0;

        function showQuestion(index) {
            containers.forEach((container, i) => {
                container.style.display = i === index ? 'block' : 'none';
            });
            prevButton.disabled = index === 0;
            nextButton.classList.toggle('hidden', index === last);
            submitButton.classList.toggle('hidden', index !== last);
        }

        nextButton.addEventListener('click', () => {
            if (current < last) {
                current++;
                showQuestion(current);
            }
        });

        prevButton.addEventListener('click', () => {
            if (current > 0) {
                current--;
                showQuestion(current);
            }
        });

        showQuestion(current);
"#;

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Full quiz page with every question embedded.
pub fn render_page(bank: &QuestionBank) -> String {
    let mut questions = String::new();
    for (n, q) in bank.iter().enumerate() {
        questions.push_str(&format!(
            "            <div class=\"question-container\" id=\"question{id}\">\n\
             \x20               <p><strong>{num}. {prompt}</strong></p>\n",
            id = q.id,
            num = n + 1,
            prompt = escape_html(&q.prompt),
        ));
        for (idx, option) in q.options.iter().enumerate() {
            questions.push_str(&format!(
                "                <label>\n\
                 \x20                   <input type=\"radio\" name=\"{field}\" value=\"{idx}\" required>\n\
                 \x20                   {option}\n\
                 \x20               </label>\n",
                field = q.id.field_name(),
                option = escape_html(option),
            ));
        }
        questions.push_str("            </div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{base}{quiz}    </style>
</head>
<body>
    <div class="quiz-container">
        <h1>{title}</h1>
        <form method="post" action="/submit" id="quiz-form">
{questions}            <div class="controls">
                <button type="button" id="prev-button" disabled>Previous</button>
                <button type="button" id="next-button">Next</button>
                <button type="submit" id="submit-button" class="hidden">Submit Quiz</button>
            </div>
        </form>
    </div>
    <script>{script}    </script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        base = BASE_STYLE,
        quiz = QUIZ_STYLE,
        questions = questions,
        script = PAGER_SCRIPT,
    )
}

/// Message shown for a score.
pub fn score_message(score: &Score) -> String {
    if score.is_perfect() {
        format!(
            "🥳 👏 Congratulations! 🎉 You got a perfect score: {} / {}! 🌟 Cheers! 🥂",
            score.correct, score.total
        )
    } else {
        format!("Your Score: {} / {}", score.correct, score.total)
    }
}

/// Score fragment returned by `POST /submit`.
pub fn render_result(score: &Score) -> String {
    format!(
        "\n    <style>{}    </style>\n    <div class='congrats'>{}</div>\n",
        BASE_STYLE,
        score_message(score)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::docker_bank;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<b>"docker run" & 'stop'</b>"#),
            "&lt;b&gt;&quot;docker run&quot; &amp; &#39;stop&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn page_lists_every_question_and_option() {
        let bank = docker_bank();
        let page = render_page(&bank);

        assert!(page.contains("<title>Docker Quiz</title>"));
        assert!(page.contains(r#"action="/submit""#));
        for q in bank.iter() {
            assert!(page.contains(&format!("id=\"question{}\"", q.id)));
            for idx in 0..q.options.len() {
                assert!(page.contains(&format!(
                    "name=\"{}\" value=\"{}\"",
                    q.id.field_name(),
                    idx
                )));
            }
        }
        assert_eq!(page.matches("type=\"radio\"").count(), bank.len() * 4);
    }

    #[test]
    fn page_escapes_prompt_text() {
        let page = render_page(&docker_bank());
        assert!(page.contains("1. What does &#39;docker run&#39; do?"));
        assert!(!page.contains("'docker run'"));
    }

    #[test]
    fn perfect_score_message() {
        let score = Score { correct: 25, total: 25 };
        let html = render_result(&score);
        assert!(html.contains("You got a perfect score: 25 / 25!"));
        assert!(html.contains("class='congrats'"));
    }

    #[test]
    fn partial_score_message() {
        let score = Score { correct: 24, total: 25 };
        assert_eq!(score_message(&score), "Your Score: 24 / 25");
    }
}
