// src/graph/layout/forces.rs
//! The four composed forces. Each adds to node velocities only.

use super::simulation::SimNode;
use crate::graph::geometry::Vec2;

const MIN_DISTANCE_SQ: f64 = 1.0;
const COLLIDE_STRENGTH: f64 = 0.7;

/// A spring between two node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    strength: f64,
    bias: f64,
}

impl Link {
    /// Builds springs weighted by endpoint degree so hubs are not yanked around.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(pairs: &[(usize, usize)], node_count: usize) -> Vec<Link> {
        let mut degree = vec![0usize; node_count];
        for &(s, t) in pairs {
            if let Some(d) = degree.get_mut(s) {
                *d += 1;
            }
            if let Some(d) = degree.get_mut(t) {
                *d += 1;
            }
        }

        pairs
            .iter()
            .filter(|(s, t)| *s < node_count && *t < node_count && s != t)
            .map(|&(source, target)| {
                let ds = degree[source] as f64;
                let dt = degree[target] as f64;
                Link {
                    source,
                    target,
                    strength: 1.0 / ds.min(dt),
                    bias: ds / (ds + dt),
                }
            })
            .collect()
    }
}

/// Pairwise inverse-square repulsion. `strength` is negative to repel.
pub fn many_body(nodes: &mut [SimNode], strength: f64, alpha: f64) {
    let n = nodes.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let mut d = nodes[j].position - nodes[i].position;
            let mut l2 = d.length_squared();
            if l2 == 0.0 {
                d = jiggle(i, j);
                l2 = d.length_squared();
            }
            let w = strength * alpha / l2.max(MIN_DISTANCE_SQ);
            nodes[i].velocity += d * w;
            nodes[j].velocity -= d * w;
        }
    }
}

/// Spring attraction toward `rest_length` along every link.
pub fn springs(nodes: &mut [SimNode], links: &[Link], rest_length: f64, alpha: f64) {
    for (k, link) in links.iter().enumerate() {
        let (s, t) = (link.source, link.target);
        let mut d = (nodes[t].position + nodes[t].velocity) - (nodes[s].position + nodes[s].velocity);
        if d.length_squared() == 0.0 {
            d = jiggle(k, s + t);
        }
        let len = d.length();
        let pull = d * ((len - rest_length) / len * alpha * link.strength);
        nodes[t].velocity -= pull * link.bias;
        nodes[s].velocity += pull * (1.0 - link.bias);
    }
}

/// Weak pull of every node toward `center`.
pub fn centering(nodes: &mut [SimNode], center: Vec2, strength: f64, alpha: f64) {
    for node in nodes.iter_mut() {
        node.velocity += (center - node.position) * (strength * alpha);
    }
}

/// Pushes apart any two nodes closer than twice `radius`.
pub fn collide(nodes: &mut [SimNode], radius: f64) {
    let min_sep = radius * 2.0;
    if min_sep <= 0.0 {
        return;
    }
    let n = nodes.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let mut d = (nodes[i].position + nodes[i].velocity) - (nodes[j].position + nodes[j].velocity);
            let mut l2 = d.length_squared();
            if l2 >= min_sep * min_sep {
                continue;
            }
            if l2 == 0.0 {
                d = jiggle(i, j);
                l2 = d.length_squared();
            }
            let len = l2.sqrt();
            let push = d * ((min_sep - len) / len * COLLIDE_STRENGTH * 0.5);
            nodes[i].velocity += push;
            nodes[j].velocity -= push;
        }
    }
}

/// Tiny deterministic offset for coincident points.
#[allow(clippy::cast_precision_loss)]
fn jiggle(a: usize, b: usize) -> Vec2 {
    let sign = if (a + b) % 2 == 0 { 1.0 } else { -1.0 };
    Vec2::new(1e-6 * (a + 1) as f64 * sign, 1e-6 * (b + 1) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(x: f64, y: f64) -> SimNode {
        SimNode::new("n".into(), Vec2::new(x, y))
    }

    #[test]
    fn repulsion_pushes_nodes_apart() {
        let mut nodes = vec![node(0.0, 0.0), node(10.0, 0.0)];
        many_body(&mut nodes, -100.0, 1.0);
        assert!(nodes[0].velocity.x < 0.0);
        assert!(nodes[1].velocity.x > 0.0);
    }

    #[test]
    fn stretched_spring_pulls_together() {
        let mut nodes = vec![node(0.0, 0.0), node(200.0, 0.0)];
        let links = Link::build(&[(0, 1)], 2);
        springs(&mut nodes, &links, 50.0, 1.0);
        assert!(nodes[0].velocity.x > 0.0);
        assert!(nodes[1].velocity.x < 0.0);
    }

    #[test]
    fn coincident_nodes_are_separated() {
        let mut nodes = vec![node(5.0, 5.0), node(5.0, 5.0)];
        collide(&mut nodes, 10.0);
        assert!(nodes[0].velocity.is_finite());
        assert!(nodes[0].velocity != nodes[1].velocity);
    }
}
