use std::collections::BTreeMap;

pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeafAnimation {
    pub token: u64,
    pub start: f64,
    pub target: f64,
    pub duration: f64,
    pub elapsed: f64,
}

impl LeafAnimation {
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    pub fn angle(&self) -> f64 {
        if self.is_finished() {
            return self.target;
        }
        self.start + (self.target - self.start) * ease_in_out(self.progress())
    }
}

#[derive(Debug, Default)]
pub struct Animator {
    next_token: u64,
    active: BTreeMap<String, LeafAnimation>,
}

impl Animator {
    pub fn start(&mut self, door_id: &str, start: f64, target: f64, speed: f64) -> u64 {
        self.next_token += 1;
        let distance = (target - start).abs();
        let duration = if speed > 0.0 && speed.is_finite() {
            distance / speed
        } else {
            0.0
        };
        let animation = LeafAnimation {
            token: self.next_token,
            start,
            target,
            duration,
            elapsed: 0.0,
        };
        self.active.insert(door_id.to_string(), animation);
        self.next_token
    }

    pub fn cancel(&mut self, door_id: &str) -> Option<LeafAnimation> {
        self.active.remove(door_id)
    }

    pub fn get(&self, door_id: &str) -> Option<&LeafAnimation> {
        self.active.get(door_id)
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn advance(&mut self, dt: f64) -> Vec<(String, f64)> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut angles = Vec::with_capacity(self.active.len());
        for (door_id, animation) in self.active.iter_mut() {
            animation.elapsed += dt;
            angles.push((door_id.clone(), animation.angle()));
        }
        self.active.retain(|_, animation| !animation.is_finished());
        angles
    }

    pub fn finish_all(&mut self) -> Vec<(String, f64)> {
        std::mem::take(&mut self.active)
            .into_iter()
            .map(|(door_id, animation)| (door_id, animation.target))
            .collect()
    }
}
