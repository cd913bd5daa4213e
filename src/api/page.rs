//! The single-page form, served inline.
//!
//! Plain HTML plus a little fetch glue; the download button builds a blob
//! client-side so the server never handles file delivery.

pub const PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Blogsmith</title>
<style>
body { background-color: #f0f0f5; font-family: Arial, sans-serif; max-width: 720px; margin: 2em auto; padding: 0 1em; }
h1 { color: #34b7f1; text-align: center; }
label { display: block; margin-top: 1em; font-weight: bold; }
input, select { width: 100%; padding: 10px; border-radius: 5px; border: 1px solid #ccc; background-color: #f2f2f2; box-sizing: border-box; }
button { background-color: #34b7f1; color: white; border: none; border-radius: 8px; font-weight: bold; padding: 10px; width: 100%; margin-top: 1.5em; cursor: pointer; }
button:hover { background-color: #1f8cba; }
#error { color: #c0392b; margin-top: 1em; }
#notice { color: #b9770e; margin-top: 1em; }
.output { background: white; border-radius: 8px; padding: 1em; margin-top: 1em; white-space: pre-wrap; }
#suggestions { color: #555; font-size: 0.9em; margin-top: 0.4em; }
.hidden { display: none; }
</style>
</head>
<body>
<h1>Blogsmith</h1>

<label for="topic">Blog topic</label>
<input id="topic" placeholder="E.g., Renewable Energy">
<div id="suggestions"></div>

<label for="words">Number of words</label>
<input id="words" type="number" min="50" max="1000" step="50" value="300">

<label for="keywords">SEO keywords (comma separated)</label>
<input id="keywords" placeholder="E.g., solar, wind, nature">

<label for="language">Language</label>
<select id="language">
  <option>English</option>
  <option>Spanish</option>
  <option>French</option>
  <option>German</option>
</select>

<button id="generate">Generate Blog</button>

<div id="error" class="hidden"></div>
<div id="notice" class="hidden"></div>

<div id="result" class="hidden">
  <h2>Generated Blog</h2>
  <div id="blog" class="output"></div>
  <h2>Summary</h2>
  <div id="summary" class="output"></div>
  <audio id="player" controls class="hidden"></audio>
  <button id="download">Download as TXT</button>
</div>

<script>
const el = (id) => document.getElementById(id);
let fullText = '';

el('topic').addEventListener('blur', async () => {
  const topic = el('topic').value.trim();
  if (!topic) return;
  const res = await fetch('/api/seo/suggest?topic=' + encodeURIComponent(topic));
  if (res.ok) {
    const words = await res.json();
    el('suggestions').textContent = 'Suggestions: ' + words.join(' | ');
  }
});

el('generate').addEventListener('click', async () => {
  el('error').classList.add('hidden');
  el('notice').classList.add('hidden');
  el('result').classList.add('hidden');
  el('generate').disabled = true;
  el('generate').textContent = 'Generating...';
  try {
    const res = await fetch('/api/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({
        topic: el('topic').value,
        word_count: Number(el('words').value),
        seo_keywords: el('keywords').value,
        language: el('language').value,
      }),
    });
    const data = await res.json();
    if (!res.ok) {
      el('error').textContent = data.error || 'Generation failed.';
      el('error').classList.remove('hidden');
      return;
    }
    fullText = data.full_text;
    el('blog').textContent = data.truncated_text;
    el('summary').textContent = data.summary || '';
    if (data.audio_url) {
      el('player').src = data.audio_url;
      el('player').classList.remove('hidden');
    } else {
      el('player').classList.add('hidden');
      if (data.audio_notice) {
        el('notice').textContent = data.audio_notice;
        el('notice').classList.remove('hidden');
      }
    }
    el('result').classList.remove('hidden');
  } finally {
    el('generate').disabled = false;
    el('generate').textContent = 'Generate Blog';
  }
});

el('download').addEventListener('click', () => {
  const blob = new Blob([fullText], { type: 'text/plain' });
  const link = document.createElement('a');
  link.href = URL.createObjectURL(blob);
  link.download = 'generated_blog.txt';
  link.click();
  URL.revokeObjectURL(link.href);
});
</script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::PAGE;

    #[test]
    fn page_offers_the_four_languages() {
        for language in ["English", "Spanish", "French", "German"] {
            assert!(PAGE.contains(language));
        }
    }

    #[test]
    fn page_enforces_word_count_bounds() {
        assert!(PAGE.contains("min=\"50\""));
        assert!(PAGE.contains("max=\"1000\""));
        assert!(PAGE.contains("step=\"50\""));
    }
}
