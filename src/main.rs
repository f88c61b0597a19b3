// src/main.rs — Hotel Shree Balaji landing page (Rust + Yew + WASM)
// Sections: header/nav, hero, rooms, amenities, places to visit, CTA,
// footer with the enquiry form. The form keeps everything in local state;
// submission is a stub sink until a real booking endpoint is wired in.

use std::rc::Rc;

use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

// ---------- fixed page content ----------

#[derive(Debug, Clone, PartialEq)]
struct RoomOffering {
    id: u32,
    title: &'static str,
    price: &'static str,
    desc: &'static str,
    img: &'static str,
}

const ROOMS: [RoomOffering; 3] = [
    RoomOffering {
        id: 1,
        title: "Deluxe Room",
        price: "₹2,499 / night",
        desc: "City view, king bed, modern comforts.",
        img: "/images/room-deluxe.jpg",
    },
    RoomOffering {
        id: 2,
        title: "Executive Suite",
        price: "₹3,999 / night",
        desc: "Spacious suite with seating area.",
        img: "/images/room-suite.jpg",
    },
    RoomOffering {
        id: 3,
        title: "Heritage Room",
        price: "₹1,899 / night",
        desc: "Cozy, traditional decor, budget friendly.",
        img: "/images/room-heritage.jpg",
    },
];

const AMENITIES: [&str; 6] = [
    "Complimentary Breakfast",
    "Free Wi-Fi",
    "24/7 Reception",
    "Daily Housekeeping",
    "Room Service",
    "Airport Pickup (on request)",
];

#[derive(Debug, Clone, PartialEq)]
struct PlaceOfInterest {
    name: &'static str,
    note: &'static str,
}

const PLACES: [PlaceOfInterest; 4] = [
    PlaceOfInterest {
        name: "Kaal Bhairav Temple",
        note: "Walking distance — major USP",
    },
    PlaceOfInterest {
        name: "Dashashwamedh Ghat",
        note: "Evening aarti & boat rides",
    },
    PlaceOfInterest {
        name: "Varanasi Ghats",
        note: "Riverside heritage walks",
    },
    PlaceOfInterest {
        name: "Tulsi Manas Temple",
        note: "Historic temple & cultural spot",
    },
];

const QUICK_TIPS: [&str; 3] = [
    "Respect local customs near ghats & temples.",
    "Best visiting months: October to March.",
    "Evening aarti at Dashashwamedh Ghat is a must-see.",
];

// Display-only special cases, keyed on the exact labels.
fn amenity_note(label: &str) -> Option<&'static str> {
    if label == "Complimentary Breakfast" {
        Some("Indian & continental options available")
    } else {
        None
    }
}

fn place_badge(name: &str) -> Option<&'static str> {
    if name == "Kaal Bhairav Temple" {
        Some("Walking distance")
    } else {
        None
    }
}

// ---------- enquiry state ----------

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct EnquiryForm {
    name: String,
    email: String,
    phone: String,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl EnquiryForm {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Message => self.message = value,
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where a submitted enquiry goes. The page only ever flips its local
/// "sent" flag; delivering the payload anywhere real is this sink's job,
/// so a booking/contact endpoint can be wired in without touching the UI.
#[derive(Clone)]
struct EnquirySink(Rc<dyn Fn(&EnquiryForm) -> Result<(), String>>);

impl EnquirySink {
    fn new(f: impl Fn(&EnquiryForm) -> Result<(), String> + 'static) -> Self {
        Self(Rc::new(f))
    }

    // Placeholder transport: serialize and log to the browser console.
    fn console() -> Self {
        Self::new(|enquiry| {
            let payload = serde_json::to_string(enquiry).map_err(|e| e.to_string())?;
            gloo::console::log!("enquiry captured (no backend wired):", payload);
            Ok(())
        })
    }

    fn deliver(&self, enquiry: &EnquiryForm) -> Result<(), String> {
        (self.0)(enquiry)
    }
}

impl PartialEq for EnquirySink {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

// One-way transition: hand the captured values to the sink, mark the page
// as sent, wipe the fields. The sink result is reported but never blocks
// the local transition.
fn submit_enquiry(
    form: &mut EnquiryForm,
    sent: &mut bool,
    sink: &EnquirySink,
) -> Result<(), String> {
    let delivery = sink.deliver(form);
    *sent = true;
    form.clear();
    delivery
}

// ---------- enquiry form component ----------

#[derive(Properties, PartialEq)]
struct EnquiryPanelProps {
    #[prop_or_else(EnquirySink::console)]
    sink: EnquirySink,
}

#[function_component(EnquiryPanel)]
fn enquiry_panel(props: &EnquiryPanelProps) -> Html {
    let form = use_state(EnquiryForm::default);
    let sent = use_state(|| false);

    if *sent {
        return html! {
            <div class="sentbox">
                { "Thanks — your message was sent. We'll contact you soon." }
            </div>
        };
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*form).clone();
            next.set(field, v);
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let v = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            let mut next = (*form).clone();
            next.set(Field::Message, v);
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        let sink = props.sink.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            let mut done = *sent;
            if let Err(err) = submit_enquiry(&mut next, &mut done, &sink) {
                gloo::console::error!("enquiry sink rejected the payload:", err);
            }
            form.set(next);
            sent.set(done);
        })
    };

    html! {
        <form class="enquiry" {onsubmit}>
            <div class="row">
                <input
                    placeholder="Name"
                    value={form.name.clone()}
                    oninput={on_input(Field::Name)}
                    required=true
                />
                <input
                    class="phone"
                    placeholder="Phone"
                    value={form.phone.clone()}
                    oninput={on_input(Field::Phone)}
                />
            </div>
            <input
                placeholder="Email"
                value={form.email.clone()}
                oninput={on_input(Field::Email)}
            />
            <textarea
                placeholder="Message / Check-in date"
                rows="2"
                value={form.message.clone()}
                oninput={on_message}
            />
            <div class="row between">
                <div class="small">{ "We reply within 24 hours." }</div>
                <button type="submit" class="primary">{ "Send Enquiry" }</button>
            </div>
        </form>
    }
}

// ---------- page ----------

fn room_card(room: &RoomOffering) -> Html {
    html! {
        <article class="card" key={room.id.to_string()}>
            <img src={room.img} alt={room.title} />
            <div class="bd">
                <h3>{ room.title }</h3>
                <p class="small">{ room.desc }</p>
                <div class="row between">
                    <div class="price">{ room.price }</div>
                    <div class="row">
                        <a href="#contact" class="btn ghost">{ "Enquire" }</a>
                        <a href="#contact" class="btn primary">{ "Book" }</a>
                    </div>
                </div>
            </div>
        </article>
    }
}

#[function_component(App)]
fn app() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    let rooms_section = html! {
        <section id="rooms" class="section">
            <h2>{ "Rooms & Suites" }</h2>
            <p class="small">{ "Three thoughtfully designed categories to suit every traveller." }</p>
            <div class="grid three">
                { for ROOMS.iter().map(room_card) }
            </div>
        </section>
    };

    let amenities_section = html! {
        <section id="amenities" class="section alt">
            <h2>{ "Amenities" }</h2>
            <p class="small">{ "Comfort-forward services included with your stay." }</p>
            <ul class="grid three tiles">
                { for AMENITIES.iter().map(|a| html! {
                    <li class="tile" key={*a}>
                        <div class="label">{ *a }</div>
                        if let Some(note) = amenity_note(a) {
                            <div class="small">{ note }</div>
                        }
                    </li>
                }) }
            </ul>
        </section>
    };

    let places_section = html! {
        <section id="places" class="section">
            <h2>{ "Explore Varanasi" }</h2>
            <p class="small">{ "Nearby attractions and pilgrimage sites — perfect for first-time visitors." }</p>
            <div class="grid places">
                <div class="placelist">
                    { for PLACES.iter().map(|p| html! {
                        <div class="tile" key={p.name}>
                            <div class="row between">
                                <div>
                                    <div class="label">{ p.name }</div>
                                    <div class="small">{ p.note }</div>
                                </div>
                                if let Some(badge) = place_badge(p.name) {
                                    <div class="badge">{ badge }</div>
                                }
                            </div>
                        </div>
                    }) }
                </div>
                <aside class="tile tips">
                    <h4>{ "Quick Tips" }</h4>
                    <ul>
                        { for QUICK_TIPS.iter().map(|t| html! { <li class="small">{ *t }</li> }) }
                    </ul>
                </aside>
            </div>
        </section>
    };

    let cta_section = html! {
        <section class="section">
            <div class="cta row between">
                <div>
                    <h3>{ "Ready to reserve?" }</h3>
                    <p class="small">{ "Reach out and we'll confirm availability and rates." }</p>
                </div>
                <a href="#contact" class="btn primary">{ "Contact & Book" }</a>
            </div>
        </section>
    };

    html! {
        <div class="page">
            <header class="topbar">
                <div class="brand row">
                    <div class="mark">{ "SB" }</div>
                    <div>
                        <div class="label">{ "Hotel Shree Balaji" }</div>
                        <div class="small">{ "Inspired by Lord Tirupati Balaji" }</div>
                    </div>
                </div>
                <nav>
                    <ul class="row">
                        <li><a href="#rooms">{ "Rooms" }</a></li>
                        <li><a href="#amenities">{ "Amenities" }</a></li>
                        <li><a href="#places">{ "Visit" }</a></li>
                        <li><a href="#contact">{ "Contact" }</a></li>
                    </ul>
                </nav>
            </header>

            <section class="hero" style="background-image: url('/images/hotel-hero.jpg');">
                <div class="herocard">
                    <h1>{ "Hotel Shree Balaji" }</h1>
                    <p>{ "Steps from Kaal Bhairav Temple — comfortable stays, complimentary breakfast & free Wi-Fi. A warm heritage welcome in Varanasi." }</p>
                    <div class="row">
                        <a href="#rooms" class="btn primary">{ "View Rooms" }</a>
                        <a href="#contact" class="btn ghost">{ "Contact & Book" }</a>
                    </div>
                </div>
            </section>

            <main>
                { rooms_section }
                { amenities_section }
                { places_section }
                { cta_section }
            </main>

            <footer id="contact" class="footer">
                <div class="row between">
                    <div>
                        <div class="label">{ "Hotel Shree Balaji" }</div>
                        <div class="small">
                            { "A-12, Near Kaal Bhairav Temple, Varanasi, Uttar Pradesh" }
                            <br />
                            { "Phone: +91 98XXXXXXXX | Email: info@shreebalaji.example" }
                        </div>
                    </div>
                    <EnquiryPanel />
                    <div class="small">
                        { format!("© {} Hotel Shree Balaji — All rights reserved", year) }
                    </div>
                </div>
            </footer>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

// ---------- tests ----------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn field_updates_are_independent() {
        let mut form = EnquiryForm::default();
        form.set(Field::Name, "A".into());
        form.set(Field::Name, "As".into());
        form.set(Field::Name, "Asha".into());
        form.set(Field::Phone, "9000000000".into());
        assert_eq!(form.name, "Asha");
        assert_eq!(form.phone, "9000000000");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");

        // last write wins per field
        form.set(Field::Email, "a@b.example".into());
        form.set(Field::Email, "asha@b.example".into());
        assert_eq!(form.email, "asha@b.example");
        assert_eq!(form.name, "Asha");
    }

    #[test]
    fn submit_flips_sent_and_clears_fields() {
        let mut form = EnquiryForm::default();
        form.set(Field::Name, "Asha".into());
        form.set(Field::Phone, "9000000000".into());
        let mut sent = false;

        let seen = Rc::new(RefCell::new(Vec::<EnquiryForm>::new()));
        let sink = {
            let seen = seen.clone();
            EnquirySink::new(move |f| {
                seen.borrow_mut().push(f.clone());
                Ok(())
            })
        };

        submit_enquiry(&mut form, &mut sent, &sink).unwrap();

        assert!(sent);
        assert_eq!(form, EnquiryForm::default());

        // the sink saw the values as typed, before the reset
        let delivered = seen.borrow();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].name, "Asha");
        assert_eq!(delivered[0].phone, "9000000000");
    }

    #[test]
    fn failing_sink_still_completes_the_transition() {
        let mut form = EnquiryForm::default();
        form.set(Field::Name, "Asha".into());
        let mut sent = false;

        let sink = EnquirySink::new(|_| Err("endpoint down".into()));
        let result = submit_enquiry(&mut form, &mut sent, &sink);

        assert_eq!(result, Err("endpoint down".to_string()));
        assert!(sent);
        assert_eq!(form, EnquiryForm::default());
    }

    #[test]
    fn sink_payload_serializes_all_four_fields() {
        let mut form = EnquiryForm::default();
        form.set(Field::Name, "Asha".into());
        form.set(Field::Email, "asha@b.example".into());
        form.set(Field::Phone, "9000000000".into());
        form.set(Field::Message, "Check-in 2nd Oct".into());

        let payload: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&form).unwrap()).unwrap();
        assert_eq!(payload["name"], "Asha");
        assert_eq!(payload["email"], "asha@b.example");
        assert_eq!(payload["phone"], "9000000000");
        assert_eq!(payload["message"], "Check-in 2nd Oct");
    }

    #[test]
    fn amenities_are_fixed_and_only_breakfast_is_annotated() {
        assert_eq!(
            AMENITIES,
            [
                "Complimentary Breakfast",
                "Free Wi-Fi",
                "24/7 Reception",
                "Daily Housekeeping",
                "Room Service",
                "Airport Pickup (on request)",
            ]
        );
        let annotated: Vec<&str> = AMENITIES
            .iter()
            .filter(|a| amenity_note(a).is_some())
            .copied()
            .collect();
        assert_eq!(annotated, ["Complimentary Breakfast"]);
        assert_eq!(
            amenity_note("Complimentary Breakfast"),
            Some("Indian & continental options available")
        );
    }

    #[test]
    fn places_are_fixed_and_only_kaal_bhairav_gets_the_badge() {
        assert_eq!(PLACES.len(), 4);
        let names: Vec<&str> = PLACES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Kaal Bhairav Temple",
                "Dashashwamedh Ghat",
                "Varanasi Ghats",
                "Tulsi Manas Temple",
            ]
        );
        let badged: Vec<&str> = PLACES
            .iter()
            .filter(|p| place_badge(p.name).is_some())
            .map(|p| p.name)
            .collect();
        assert_eq!(badged, ["Kaal Bhairav Temple"]);
        assert_eq!(place_badge("Kaal Bhairav Temple"), Some("Walking distance"));
    }

    #[test]
    fn room_ids_are_unique_and_stable() {
        let ids: Vec<u32> = ROOMS.iter().map(|r| r.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        let titles: Vec<&str> = ROOMS.iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Deluxe Room", "Executive Suite", "Heritage Room"]);
        for room in &ROOMS {
            assert!(room.img.starts_with("/images/"));
            assert!(room.price.contains("/ night"));
        }
    }
}
