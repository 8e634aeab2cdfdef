//! Stylesheet generation.
//!
//! The page shell carries a single inline stylesheet. Its structure is fixed;
//! only the palette values change between sites. Values are substituted
//! verbatim: they are trusted CSS tokens, neither validated nor escaped.

use crate::config::CssPalette;

/// Render the site stylesheet for a palette.
pub fn generate_css(css: &CssPalette) -> String {
    format!(
        r#"body {{
background-color: {bgcolor};
background-attachment: fixed;
background-image: url('{background_image}');
color: black;
font-family: Verdana, Arial, Helvetica, sans-serif;
font-size: 15px;
margin-left: 220px;
}}

h1 {{
width: 95%;
background-color: {light_color};
color: {dark_color};
border: 1px solid black;
text-align: center;
margin-left: auto;
margin-right: auto;
margin-top: 25px;
margin-bottom: 0px;
}}

h2 {{
width: 75%;
background-color: {dark_color};
color: white;
border: 1px solid black;
text-align: center;
margin-left: auto;
margin-right: auto;
margin-top: 25px;
margin-bottom: 5px;
}}

h3 {{
color: {dark_color};
margin-left: 3%;
margin-right: 3%;
margin-top: 10px;
margin-bottom: 5px;
}}

p.level2 {{
color: black;
margin-left: 3%;
margin-right: 3%;
margin-top: 5px;
margin-bottom: 5px;
}}

p.level3 {{
color: black;
margin-left: 6%;
margin-right: 6%;
margin-top: 5px;
margin-bottom: 5px;
}}

ol.level3 {{
margin-left: 6%;
margin-right: 6%;
}}

ul.level3 {{
margin-left: 6%;
margin-right: 6%;
}}

a {{ text-decoration: underline }}
a:link {{ color: #00C; }}
a:visited {{ color: #609; }}
a:hover {{ text-decoration: none; }}
a:active {{ color: #C00; }}

a.menu {{ text-decoration: underline; color: white; }}
a.menu:link {{ text-decoration: underline; color: white; }}
a.menu:visited {{ text-decoration: underline; color: white; }}
a.menu:hover {{ text-decoration: none; }}

b.mb {{ color: white; }}
i.mb {{ color: white; }}

h2.project {{
width: auto;
background: none;
border: none;
text-align: left;
font-size: 15px;
margin: 0px;
}}

#menu {{
position: absolute;
top: 15px;
left: 8px;
width: 200px;
}}

.menubox {{
background-color: {menu_bgcolor};
border: 5px solid black;
padding: 5px;
}}

.releasebox {{
background: {release_bgcolor};
border: 1px solid black;
padding: 5px;
font-size: 13px;
}}

.dependencybox {{
background: {release_bgcolor};
margin-top: 10px;
}}

.contentsbox {{
background: {contentsbox_bgcolor};
border: 1px solid black;
padding: 5px;
}}

.center {{
margin-left: auto;
margin-right: auto;
text-align: center;
}}

.right {{
text-align: right;
}}

code
{{
background-color: {code_bgcolor};
color: {code_fgcolor};
}}

pre
{{
display: block;
background-color: {pre_bgcolor};
color: black;
}}

pre.level2
{{
display: block;
background-color: {pre_bgcolor};
color: black;
margin-left: 3%;
margin-right: 3%;
}}

pre.level3
{{
display: block;
background-color: {pre_bgcolor};
color: black;
margin-left: 6%;
margin-right: 6%;
}}
"#,
        bgcolor = css.bgcolor,
        background_image = css.background_image,
        light_color = css.light_color,
        dark_color = css.dark_color,
        menu_bgcolor = css.menu_bgcolor,
        release_bgcolor = css.release_bgcolor,
        contentsbox_bgcolor = css.contentsbox_bgcolor,
        code_bgcolor = css.code_bgcolor,
        code_fgcolor = css.code_fgcolor,
        pre_bgcolor = css.pre_bgcolor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> CssPalette {
        CssPalette {
            bgcolor: "#010101".to_string(),
            background_image: "images/bg.png".to_string(),
            light_color: "#020202".to_string(),
            dark_color: "#030303".to_string(),
            menu_bgcolor: "#040404".to_string(),
            release_bgcolor: "#050505".to_string(),
            contentsbox_bgcolor: "#060606".to_string(),
            code_bgcolor: "#070707".to_string(),
            code_fgcolor: "#080808".to_string(),
            pre_bgcolor: "#090909".to_string(),
        }
    }

    #[test]
    fn substitutes_every_palette_value() {
        let css = generate_css(&palette());
        assert!(css.contains("background-color: #010101;"));
        assert!(css.contains("background-image: url('images/bg.png');"));
        assert!(css.contains("background-color: #020202;"));
        assert!(css.contains("color: #030303;"));
        assert!(css.contains("background-color: #040404;"));
        assert!(css.contains("background: #050505;"));
        assert!(css.contains("background: #060606;"));
        assert!(css.contains("background-color: #070707;"));
        assert!(css.contains("color: #080808;"));
        assert!(css.contains("background-color: #090909;"));
    }

    #[test]
    fn pre_color_used_at_all_three_levels() {
        let css = generate_css(&palette());
        assert_eq!(css.matches("background-color: #090909;").count(), 3);
    }

    #[test]
    fn contains_fixed_rule_blocks() {
        let css = generate_css(&CssPalette::default());
        for selector in [
            "body {",
            "h1 {",
            "h2 {",
            "h3 {",
            "p.level2 {",
            "p.level3 {",
            "ol.level3 {",
            "ul.level3 {",
            "a:visited {",
            "a:hover {",
            "a:active {",
            "a.menu:link {",
            "#menu {",
            ".menubox {",
            ".releasebox {",
            ".dependencybox {",
            ".contentsbox {",
            "pre.level3",
        ] {
            assert!(css.contains(selector), "missing rule block: {selector}");
        }
    }

    #[test]
    fn braces_balanced() {
        let css = generate_css(&CssPalette::default());
        assert_eq!(css.matches('{').count(), css.matches('}').count());
    }

    #[test]
    fn values_not_escaped() {
        let mut css = CssPalette::default();
        css.background_image = "a&b<c>".to_string();
        assert!(generate_css(&css).contains("url('a&b<c>')"));
    }

    #[test]
    fn deterministic() {
        let css = CssPalette::default();
        assert_eq!(generate_css(&css), generate_css(&css));
    }
}
