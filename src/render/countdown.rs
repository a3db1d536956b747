use chrono::{DateTime, Locale, Utc};

use crate::countdown::time_remaining;
use crate::model::Deadline;
use crate::render::escape;

/// Human-readable deadline date, with the time of day when the deadline
/// asks for it.
pub fn format_deadline(deadline: &Deadline, locale: Locale) -> String {
    let date = deadline
        .target
        .format_localized("%A, %B %-d, %Y", locale)
        .to_string();
    if !deadline.show_time {
        return date;
    }
    let time = deadline
        .target
        .format_localized("%-I:%M %p", locale)
        .to_string();
    let offset = deadline.target.format("UTC%:z");
    format!("{date} at {} {offset}", time.trim())
}

/// A countdown box, filled in with the time remaining at `now`.
///
/// The target is carried in `data-target` so the page script can keep it
/// current in the browser.
pub(crate) fn countdown_box(deadline: &Deadline, now: DateTime<Utc>, locale: Locale) -> String {
    let remaining = time_remaining(deadline.target, now);
    let passed = remaining.is_passed();

    let mut html = String::with_capacity(1024);
    html.push_str(&format!(
        "<div class=\"countdown\" data-target=\"{}\">\n",
        deadline.target.timestamp_millis()
    ));
    html.push_str(&format!("<h3>{}</h3>\n", escape(&deadline.title)));
    html.push_str(&format!(
        "<p class=\"countdown-date\">{}</p>\n",
        escape(&format_deadline(deadline, locale))
    ));

    html.push_str(&format!(
        "<p class=\"countdown-passed\"{}>Deadline passed</p>\n",
        if passed { "" } else { " hidden" }
    ));
    html.push_str(&format!(
        "<div class=\"countdown-units\"{}>\n",
        if passed { " hidden" } else { "" }
    ));
    for (unit, value) in [
        ("days", remaining.days),
        ("hours", remaining.hours),
        ("minutes", remaining.minutes),
    ] {
        html.push_str(&format!(
            "<div class=\"countdown-unit\"><span class=\"countdown-value\" data-unit=\"{unit}\">{value}</span><span class=\"countdown-label\">{unit}</span></div>\n"
        ));
    }
    html.push_str("</div>\n</div>\n");
    html
}

/// Recomputes every countdown on the page once a minute.
pub(crate) const COUNTDOWN_SCRIPT: &str = r#"<script>
(function () {
  var DAY = 86400000, HOUR = 3600000, MINUTE = 60000;
  function tick() {
    document.querySelectorAll('.countdown').forEach(function (box) {
      var left = Number(box.dataset.target) - Date.now();
      var units = box.querySelector('.countdown-units');
      var passed = box.querySelector('.countdown-passed');
      if (left <= 0) {
        units.hidden = true;
        passed.hidden = false;
        return;
      }
      box.querySelector('[data-unit=days]').textContent = Math.floor(left / DAY);
      box.querySelector('[data-unit=hours]').textContent = Math.floor((left % DAY) / HOUR);
      box.querySelector('[data-unit=minutes]').textContent = Math.floor((left % HOUR) / MINUTE);
    });
  }
  tick();
  setInterval(tick, MINUTE);
})();
</script>
"#;
