// src/graph/render.rs
//! Static SVG snapshot of a laid-out graph.

use std::fmt::Write;

use super::view::GraphView;

/// Renders nodes, curved edges and arrowheads with the current view transform.
#[must_use]
pub fn to_svg(view: &GraphView) -> String {
    let layout = view.simulation().config();
    let vp = view.viewport();
    let t = vp.translate();
    let r = view.node_radius();

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
        layout.width, layout.height, layout.width, layout.height
    );
    let _ = writeln!(
        out,
        r#"<g transform="translate({:.2},{:.2}) scale({:.3})">"#,
        t.x,
        t.y,
        vp.scale()
    );

    for (edge, path) in view.edge_paths() {
        let _ = writeln!(
            out,
            r##"<path d="{}" fill="none" stroke="#999" stroke-width="1.2" data-kind="{}"/>"##,
            path.to_svg_d(),
            edge.relationship
        );
        let _ = writeln!(out, r##"<polygon points="{}" fill="#999"/>"##, path.arrow_points());
    }

    for node in &view.graph().nodes {
        let Some(p) = view.simulation().position(&node.id) else {
            continue;
        };
        let _ = writeln!(
            out,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{r:.1}" fill="{}" data-id="{}"><title>{}</title></circle>"#,
            p.x,
            p.y,
            node.kind.color(),
            escape(&node.id),
            escape(&node.label)
        );
    }

    out.push_str("</g>\n</svg>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
