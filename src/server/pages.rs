//! HTML pages served by both apps
//!
//! Everything interpolated here is escaped except the chart fragment, which
//! is produced by the renderer or already escaped by the handler.

use crate::utils::escape_html;

/// Chart viewer page with the period/interval form
pub fn chart_page(graph_div: &str, period: &str, interval: &str) -> String {
    let period = escape_html(period);
    let interval = escape_html(interval);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Gold Price &amp; MACD</title>
  <style>
    body {{ font-family: sans-serif; margin: 1.5rem; }}
    form {{ margin-bottom: 1rem; }}
    .alert {{ padding: 0.75rem; background: #fde2e1; color: #8a1c1c; border-radius: 4px; }}
  </style>
</head>
<body>
  <h1>Gold (GC=F) Close and MACD</h1>
  <form method="get" action="/">
    <label>Period <input name="period" value="{period}"></label>
    <label>Interval <input name="interval" value="{interval}"></label>
    <button type="submit">Update</button>
  </form>
  {graph_div}
</body>
</html>
"#,
        period = period,
        interval = interval,
        graph_div = graph_div,
    )
}

/// Hangman page; the script drives /guess and /new
pub fn hangman_page(masked: &str, word_len: usize, max_fails: u32) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Hangman</title>
  <style>
    body {{ font-family: sans-serif; margin: 1.5rem; }}
    #masked {{ font-size: 2rem; letter-spacing: 0.2rem; font-family: monospace; }}
    #message {{ min-height: 1.5rem; }}
  </style>
</head>
<body>
  <h1>Hangman</h1>
  <p id="masked">{masked}</p>
  <p>The word has {word_len} letters. You can miss {max_fails} times.</p>
  <form id="guess-form">
    <input id="letter" name="letter" maxlength="1" autocomplete="off" autofocus>
    <button type="submit">Guess</button>
    <button type="button" id="new-game">New game</button>
  </form>
  <p id="message"></p>
  <p>Guessed: <span id="guessed"></span></p>
  <p>Misses: <span id="fail">0</span> / <span id="max-fails">{max_fails}</span></p>
  <script>
    function show(state) {{
      document.getElementById("masked").textContent = state.masked;
      document.getElementById("guessed").textContent = state.guessed.join(", ");
      document.getElementById("fail").textContent = state.fail;
      document.getElementById("max-fails").textContent = state.max_fails;
    }}
    async function refresh() {{
      const res = await fetch("/state");
      show(await res.json());
    }}
    document.getElementById("guess-form").addEventListener("submit", async (ev) => {{
      ev.preventDefault();
      const input = document.getElementById("letter");
      const res = await fetch("/guess", {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify({{ letter: input.value }}),
      }});
      const data = await res.json();
      input.value = "";
      if (!res.ok) {{
        document.getElementById("message").textContent = data.error;
        return;
      }}
      show(data);
      document.getElementById("message").textContent = data.message;
    }});
    document.getElementById("new-game").addEventListener("click", async () => {{
      const res = await fetch("/new", {{ method: "POST" }});
      const data = await res.json();
      document.getElementById("message").textContent = data.message;
      window.location.reload();
    }});
    refresh();
  </script>
</body>
</html>
"#,
        masked = escape_html(masked),
        word_len = word_len,
        max_fails = max_fails,
    )
}
