use fontfall::{FallbackMetrics, FontTypes, InMemoryMetricsProvider, SrcUrlToFilename};

/// Three complete rules: serif italic, sans-serif normal, mono bold.
pub const THREE_FONTS_CSS: &str = "\
@font-face {
  font-family: 'Noto Serif';
  font-style: italic;
  font-weight: 400;
  font-display: swap;
  src: url(./test/fonts/noto-serif/NotoSerif-Italic.ttf) format('truetype');
}

@font-face {
  font-family: \"Roboto\";
  font-style: normal;
  font-weight: 400;
  src: url('./test/fonts/roboto/Roboto-Regular.ttf') format('truetype');
}

@font-face {
  font-family: Ubuntu Mono;
  font-style: normal;
  font-weight: 700;
  src: url(./test/fonts/ubuntu-mono/UbuntuMono-Bold.ttf) format('truetype');
}

body {
  font-family: 'Noto Serif', serif;
}
";

pub const THREE_FONTS_URLS: [&str; 3] = [
    "./test/fonts/noto-serif/NotoSerif-Italic.ttf",
    "./test/fonts/roboto/Roboto-Regular.ttf",
    "./test/fonts/ubuntu-mono/UbuntuMono-Bold.ttf",
];

/// Root-relative URLs, as served by a web server.
pub const ABSOLUTE_URLS_CSS: &str = "\
@font-face {
  font-family: 'Noto Serif';
  font-style: italic;
  src: url(/noto-serif/NotoSerif-Italic.ttf) format('truetype');
}
@font-face {
  font-family: 'Roboto';
  font-weight: 400;
  src: url(/roboto/Roboto-Regular.ttf) format('truetype');
}
@font-face {
  font-family: 'Ubuntu Mono';
  font-weight: 700;
  src: url(/ubuntu-mono/UbuntuMono-Bold.ttf?v=2) format('truetype'), local('Ubuntu Mono');
}
";

/// Rules whose values cannot be read cleanly, around one good rule.
pub const UNREADABLE_VALUES_CSS: &str = "\
@font-face {
  font-family: 'Roboto';
  src: url(./test/fonts/roboto/Roboto-Regular.ttf) format('truetype');
}
@font-face {
  font-family: 'Roboto';
  src: url('broken.ttf) format(truetype);
}
@font-face {
  font-family: \"Roboto\", sans-serif;
  src: url(./test/fonts/roboto/Roboto-Regular.ttf);
}
@font-face {
  font-family: ;
  src: url(./test/fonts/roboto/Roboto-Regular.ttf);
}
";

/// One problem per rule, in this order: duplicate, missing src, missing
/// family, no url, unmapped family.
pub const WARNINGS_CSS: &str = "\
@font-face {
  font-family: 'Roboto';
  font-family: 'Roboto Slab';
  src: url(./test/fonts/roboto/Roboto-Regular.ttf);
}
@font-face {
  font-family: 'Noto Serif';
}
@font-face {
  src: url(./test/fonts/noto-serif/NotoSerif-Italic.ttf);
}
@font-face {
  font-family: 'Roboto';
  src: local('Roboto') format('truetype');
}
@font-face {
  font-family: 'Ubuntu Mono';
  src: url(./test/fonts/ubuntu-mono/UbuntuMono-Bold.ttf);
}
";

pub fn font_types() -> FontTypes {
    [("Noto Serif", "serif"), ("Roboto", "sans-serif"), ("Ubuntu Mono", "mono")]
        .into_iter()
        .map(|(family, class)| (family.into(), class.into()))
        .collect()
}

/// Same as [`font_types`] without `Ubuntu Mono`.
pub fn font_types_without_mono() -> FontTypes {
    let mut types = font_types();
    types.remove("Ubuntu Mono");
    types
}

pub fn sample_metrics(local_font: &str) -> FallbackMetrics {
    FallbackMetrics {
        ascent_override: 1.0302,
        descent_override: Some(0.2814),
        line_gap_override: Some(0.0),
        size_adjust: 1.0623,
        local_font: Some(local_font.to_string()),
    }
}

/// A provider knowing every URL in `urls`, keyed by the path `resolve` maps
/// it to.
pub fn provider_for(urls: &[&str], resolve: &SrcUrlToFilename) -> InMemoryMetricsProvider {
    urls.iter().fold(InMemoryMetricsProvider::new(), |provider, url| {
        provider.with(resolve(url), sample_metrics("Arial"))
    })
}
