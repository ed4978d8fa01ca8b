//! Scoped styles for the card front.
//!
//! Injected next to the card markup; every selector is anchored on a card
//! class so the host page's styles are left alone.

pub const CARD_STYLES: &str = r#"
.card-front {
  position: absolute;
  backface-visibility: hidden;
  background: #ffffff;
  border-radius: 5px;
  width: 100%;
  height: 100%;
  transform: translateY(0);
  overflow: visible;
}
.card-front.is-vertical {
  grid-template-columns: 100%;
  grid-template-rows: 60% 40%;
}
.card-front p {
  margin: 0;
}
.card-front .asset-details-container {
  display: grid;
  grid-template-rows: auto;
  grid-template-columns: minmax(100px, 350px) 1fr;
  padding: 10px;
  align-items: center;
}
.card-front .asset-detail {
  display: flex;
}
.card-front .asset-detail .asset-detail-type {
  height: 35px;
  font-size: 12px;
  margin-right: 10px;
}
.card-front .asset-detail-name {
  font-weight: 300;
  text-align: left;
  display: flex;
}
.card-front .asset-detail-price {
  align-items: flex-end;
  font-size: 16px;
  font-weight: 300;
  display: flex;
  flex-flow: row;
  justify-content: flex-end;
  line-height: 15px;
  text-align: right;
  padding: 6px 0;
}
.card-front .asset-detail-price img {
  margin: 0 4px;
}
.card-front .asset-detail-price-current img {
  width: 15px;
}
.card-front .asset-detail-price-previous {
  font-size: 14px;
  color: rgb(130, 130, 130);
  line-height: 10px;
}
.card-front .asset-detail-price-previous img {
  width: 1ex;
}
.card-front .asset-detail-price .previous-value {
  font-size: 14px;
  color: #828282;
}
.card-front .asset-action-buy {
  grid-column-start: 1;
  grid-column-end: 3;
}
.card-front .asset-action-buy button {
  width: 100%;
  background: black;
  border-radius: 5px;
  height: 35px;
  color: white;
  font-weight: bold;
  letter-spacing: 0.5px;
  cursor: pointer;
  transition: 200ms;
  outline: none;
  border-style: none;
  text-transform: uppercase;
}
.card-front .asset-action-buy button:hover {
  background: rgb(61, 61, 61);
}
.card-front .asset-link {
  text-decoration: none;
  color: #222222;
}
.card-front .info-button {
  position: absolute;
  top: 5px;
  right: 5px;
  width: 22px;
  height: 22px;
  border-radius: 50%;
  border: 1px solid #e2e6ef;
  background: #ffffff;
  color: #828282;
  font-size: 12px;
  font-style: italic;
  cursor: pointer;
  outline: none;
}
.card-front .pill {
  display: inline-flex;
  align-items: center;
  height: 30px;
  padding: 0 10px;
  border-radius: 15px;
  font-size: 12px;
  white-space: nowrap;
}
.card-front .pill img {
  width: 18px;
  height: 18px;
  border-radius: 50%;
  margin-right: 6px;
}
"#;
