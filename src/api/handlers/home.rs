use axum::response::{Html, IntoResponse};

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Beach Volleyball Ladder</title>
  </head>
  <body>
    <h1>Register player</h1>
    <form action="/player" method="POST" enctype="multipart/form-data">
      <input name="username" placeholder="Username" required><br>
      <input name="year" type="number" placeholder="Birth year" required><br>
      <select name="gender">
        <option value="male">Male</option>
        <option value="flinta">FLINTA</option>
      </select><br>
      <input type="file" name="photo" accept="image/*"><br>
      <button type="submit">Add</button>
    </form>

    <h1>Record match</h1>
    <form id="match-form">
      <p>Winning team:</p>
      <input name="winners" placeholder="e.g. Anna, Ben" required><br>
      <p>Losing team:</p>
      <input name="losers" placeholder="e.g. Chris, Dana" required><br>
      <button type="submit">Record match</button>
    </form>

    <h1>Ratings</h1>
    <ul>
      <li><a href="/ratings">All</a></li>
      <li><a href="/ratings/flinta">FLINTA</a></li>
      <li><a href="/ratings/u23">U23</a></li>
      <li><a href="/ratings/ue30">Over 30</a></li>
    </ul>

    <script>
      const names = (field) => field.value.split(',').map((x) => x.trim()).filter(Boolean);

      document.getElementById('match-form').addEventListener('submit', (event) => {
        event.preventDefault();
        const form = event.target;
        fetch('/match', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ winners: names(form.winners), losers: names(form.losers) }),
        })
          .then((res) => res.json())
          .then(() => {
            alert('Match saved!');
            window.location.reload();
          });
      });
    </script>
  </body>
</html>
"#;

pub async fn index() -> impl IntoResponse {
    Html(INDEX_PAGE)
}
