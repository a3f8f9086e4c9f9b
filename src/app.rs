use treasure_hunt::prelude::*;
use yew::prelude::*;

const HUNTS: &str = include_str!("../assets/hunts.json");

fn load_catalog() -> HuntCatalog {
    match HuntCatalog::from_json(HUNTS) {
        Ok(catalog) => {
            log::info!("Loaded {} hunts", catalog.get_hunts().len());
            catalog
        }
        Err(err) => {
            log::error!("Failed to load hunts: {}", err);
            HuntCatalog::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let catalog = use_state(load_catalog);

    html! {
        <div class="treasure-hunt-app">
            <h1 class="treasure-hunt-app__title">{"Chasses au trésor"}</h1>
            <div class="treasure-hunt-app__grid">
                {for catalog.get_hunts().iter().map(|hunt| {
                    let on_join = {
                        let catalog = catalog.clone();
                        let hunt_id = hunt.id.clone();
                        Callback::from(move |_: ()| {
                            let mut updated = (*catalog).clone();
                            match updated.join(&hunt_id) {
                                Ok(_) => catalog.set(updated),
                                Err(err) => log::error!("Join error: {}", err),
                            }
                        })
                    };

                    html! {
                        <TreasureHuntCardComp
                            key={hunt.id.clone()}
                            hunt={hunt.clone()}
                            {on_join}
                        />
                    }
                })}
            </div>
        </div>
    }
}
