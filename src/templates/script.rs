use crate::contact::SENDING_LABEL;
use crate::render::js_string;
use crate::templates::components::nav::SCROLL_THRESHOLD;

/// Browser half of the header, reveal and contact form behaviour.
///
/// Kept in step with `NavState`, `ImageSlot` and `ContactForm`, which model
/// the same transitions on the server.
pub fn site_script() -> String {
    format!(
        r#"'use strict';
document.addEventListener('DOMContentLoaded', function () {{
  var nav = document.querySelector('.nav-wrapper');
  if (nav) {{
    var onScroll = function () {{
      nav.classList.toggle('scrolled', window.scrollY > {threshold});
    }};
    window.addEventListener('scroll', onScroll, {{ passive: true }});
    onScroll();
  }}

  var overlay = document.getElementById('mobileOverlay');
  document.querySelectorAll('[data-menu-toggle]').forEach(function (btn) {{
    btn.addEventListener('click', function () {{
      if (overlay) overlay.classList.toggle('active');
    }});
  }});

  var delay = document.body.dataset.revealDelay;
  if (delay !== undefined) {{
    setTimeout(function () {{
      document.querySelectorAll('.reveal').forEach(function (el) {{ el.classList.add('active'); }});
    }}, parseInt(delay, 10) || 0);
  }}

  document.querySelectorAll('form[data-contact-form]').forEach(function (form) {{
    form.addEventListener('submit', function () {{
      var btn = form.querySelector('button[type=submit]');
      if (!btn) return;
      btn.disabled = true;
      btn.textContent = {sending};
    }});
  }});
}});
"#,
        threshold = SCROLL_THRESHOLD,
        sending = js_string(SENDING_LABEL),
    )
}
