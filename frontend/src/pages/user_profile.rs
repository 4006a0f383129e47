use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UserProfileProps {
    pub user_id: AttrValue,
}

#[function_component(UserProfilePage)]
pub fn user_profile_page(props: &UserProfileProps) -> Html {
    html! {
        <div class="page user-profile">
            <h1 class="text-center">
                {"User: "}
                <span class="highlight">{props.user_id.clone()}</span>
            </h1>
        </div>
    }
}
